// SPDX-License-Identifier: MPL-2.0
//! In-process implementation of the event channel port.
//!
//! Producers call [`InProcessBus::emit`] with an event name and a payload;
//! every listener registered under that name receives a copy, in emission
//! order. Detaching a listener removes it from the registry, so nothing is
//! delivered to it afterwards.

use crate::application::port::{BusError, EventBus, Listener, Unlisten};
use iced::futures::future::{self, BoxFuture};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::sync::mpsc;

type Sender = mpsc::UnboundedSender<String>;

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: HashMap<String, Vec<(u64, Sender)>>,
}

/// Cloneable handle to a shared in-process event registry.
#[derive(Debug, Clone, Default)]
pub struct InProcessBus {
    registry: Arc<Mutex<Registry>>,
}

impl InProcessBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `payload` under `event`.
    ///
    /// Returns the number of listeners that received it. Listeners whose
    /// receiver was dropped without detaching are pruned on the way.
    pub fn emit(&self, event: &str, payload: impl Into<String>) -> usize {
        let payload = payload.into();
        let mut registry = lock(&self.registry);

        let Some(listeners) = registry.listeners.get_mut(event) else {
            log::trace!("No listener for {event}, dropping {payload}");
            return 0;
        };

        listeners.retain(|(_, sender)| sender.send(payload.clone()).is_ok());
        let delivered = listeners.len();
        if listeners.is_empty() {
            registry.listeners.remove(event);
        }
        delivered
    }

    /// Returns the number of live listeners for `event`.
    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        lock(&self.registry)
            .listeners
            .get(event)
            .map_or(0, Vec::len)
    }

    fn register(&self, event: &str) -> Listener {
        let (sender, receiver) = mpsc::unbounded_channel();

        let id = {
            let mut registry = lock(&self.registry);
            let id = registry.next_id;
            registry.next_id += 1;
            registry
                .listeners
                .entry(event.to_string())
                .or_default()
                .push((id, sender));
            id
        };

        let registry = Arc::downgrade(&self.registry);
        let event = event.to_string();
        Listener::new(receiver, Unlisten::new(move || detach(&registry, &event, id)))
    }
}

impl EventBus for InProcessBus {
    fn listen(&self, event: &str) -> BoxFuture<'static, Result<Listener, BusError>> {
        let listener = self.register(event);
        log::debug!("Registered listener for {event}");
        Box::pin(future::ready(Ok(listener)))
    }
}

fn detach(registry: &Weak<Mutex<Registry>>, event: &str, id: u64) {
    // The bus may already be gone at shutdown.
    let Some(registry) = registry.upgrade() else {
        return;
    };

    let mut registry = lock(&registry);
    if let Some(listeners) = registry.listeners.get_mut(event) {
        listeners.retain(|(listener_id, _)| *listener_id != id);
        if listeners.is_empty() {
            registry.listeners.remove(event);
        }
    }
    log::debug!("Detached listener {id} from {event}");
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}
