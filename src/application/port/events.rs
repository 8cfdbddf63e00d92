// SPDX-License-Identifier: MPL-2.0
//! Event channel port definition.
//!
//! An [`EventBus`] delivers string payloads published under a name (for
//! example `color-update`). Registration is asynchronous: the returned future
//! resolves to a [`Listener`] once the producer side knows about it.

use iced::futures::future::BoxFuture;
use std::fmt;
use tokio::sync::mpsc;

/// Errors raised while registering a listener.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusError {
    /// The bus no longer accepts listeners.
    #[error("event bus is closed")]
    Closed,

    /// The producer refused the registration.
    #[error("listener registration failed: {0}")]
    Registration(String),
}

/// One-shot capability that detaches a listener from its bus.
pub struct Unlisten(Box<dyn FnOnce() + Send>);

impl Unlisten {
    pub fn new(detach: impl FnOnce() + Send + 'static) -> Self {
        Self(Box::new(detach))
    }

    /// Detaches the listener. Consumes the capability so it runs at most once.
    pub fn invoke(self) {
        (self.0)();
    }
}

impl fmt::Debug for Unlisten {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unlisten")
    }
}

/// A live registration: the payload receiver plus the way to detach it.
#[derive(Debug)]
pub struct Listener {
    events: mpsc::UnboundedReceiver<String>,
    unlisten: Unlisten,
}

impl Listener {
    #[must_use]
    pub fn new(events: mpsc::UnboundedReceiver<String>, unlisten: Unlisten) -> Self {
        Self { events, unlisten }
    }

    /// Splits the listener into its receiver and its detach capability.
    #[must_use]
    pub fn into_parts(self) -> (mpsc::UnboundedReceiver<String>, Unlisten) {
        (self.events, self.unlisten)
    }
}

/// Port for subscribing to named event streams.
pub trait EventBus: Send + Sync {
    /// Registers a listener for `event`.
    ///
    /// The future resolves once the registration is live; payloads emitted
    /// afterwards are delivered in emission order.
    fn listen(&self, event: &str) -> BoxFuture<'static, Result<Listener, BusError>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn unlisten_runs_detach_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let unlisten = Unlisten::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        unlisten.invoke();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listener_into_parts_keeps_receiver() {
        let (tx, rx) = mpsc::unbounded_channel();
        let listener = Listener::new(rx, Unlisten::new(|| {}));
        tx.send("#123456".to_string()).expect("receiver alive");

        let (mut events, _unlisten) = listener.into_parts();
        assert_eq!(events.try_recv().ok().as_deref(), Some("#123456"));
    }

    #[test]
    fn bus_error_display() {
        assert_eq!(BusError::Closed.to_string(), "event bus is closed");
        assert!(BusError::Registration("denied".into())
            .to_string()
            .contains("denied"));
    }
}
