// SPDX-License-Identifier: MPL-2.0
//! Fake ports shared by unit and integration tests.
//!
//! - [`RecordingClipboard`] keeps every written text, or fails on demand.
//! - [`FakeBus`] wraps an [`InProcessBus`] whose registrations can be held
//!   back behind a gate, fail, and count their detachments.

use crate::application::port::{
    BusError, ClipboardError, ClipboardWriter, EventBus, Listener, Unlisten,
};
use crate::infrastructure::InProcessBus;
use iced::futures::future::BoxFuture;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;

/// Clipboard that records writes instead of touching the OS.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
    failure: Option<ClipboardError>,
}

impl RecordingClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `error`.
    #[must_use]
    pub fn failing(error: ClipboardError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Texts written so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(())
    }
}

/// Event bus whose registrations complete only once its gate is open.
#[derive(Debug, Clone)]
pub struct FakeBus {
    bus: InProcessBus,
    gate: Arc<watch::Sender<bool>>,
    failure: Option<BusError>,
    unlisten_calls: Arc<AtomicUsize>,
}

impl FakeBus {
    fn with_gate(open: bool, failure: Option<BusError>) -> Self {
        let (gate, _) = watch::channel(open);
        Self {
            bus: InProcessBus::new(),
            gate: Arc::new(gate),
            failure,
            unlisten_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Registrations complete immediately.
    #[must_use]
    pub fn ready() -> Self {
        Self::with_gate(true, None)
    }

    /// Registrations stay pending until [`FakeBus::open`] is called.
    #[must_use]
    pub fn gated() -> Self {
        Self::with_gate(false, None)
    }

    /// Registrations fail with `error`.
    #[must_use]
    pub fn failing(error: BusError) -> Self {
        Self::with_gate(true, Some(error))
    }

    /// Lets pending and future registrations complete.
    pub fn open(&self) {
        self.gate.send_replace(true);
    }

    pub fn emit(&self, event: &str, payload: impl Into<String>) -> usize {
        self.bus.emit(event, payload)
    }

    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.bus.listener_count(event)
    }

    /// Number of listeners detached so far.
    #[must_use]
    pub fn unlisten_calls(&self) -> usize {
        self.unlisten_calls.load(Ordering::SeqCst)
    }
}

impl EventBus for FakeBus {
    fn listen(&self, event: &str) -> BoxFuture<'static, Result<Listener, BusError>> {
        let bus = self.bus.clone();
        let mut gate = self.gate.subscribe();
        let failure = self.failure.clone();
        let calls = Arc::clone(&self.unlisten_calls);
        let event = event.to_string();

        Box::pin(async move {
            let opened = gate.wait_for(|open| *open).await.is_ok();
            if !opened {
                return Err(BusError::Closed);
            }
            if let Some(error) = failure {
                return Err(error);
            }

            let (events, unlisten) = bus.listen(&event).await?.into_parts();
            Ok(Listener::new(
                events,
                Unlisten::new(move || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    unlisten.invoke();
                }),
            ))
        })
    }
}
