// SPDX-License-Identifier: MPL-2.0
//! Subscription to the `color-update` event channel.
//!
//! [`ColorSubscription`] owns the registration on an [`EventBus`] for the
//! lifetime of a mounted picker:
//!
//! ```text
//! Acquiring ──► Subscribed ──► Unsubscribed
//!     │                            ▲
//!     ├──► ReleaseQueued ──────────┤   (teardown raced acquisition)
//!     └────────────────────────────┘   (acquisition failed)
//! ```
//!
//! Acquisition runs on a spawned task because registration may resolve after
//! an arbitrary delay. Releasing while it is still pending queues the release:
//! the task detaches the listener as soon as registration completes, and no
//! event is ever delivered. Releasing is idempotent and also happens on drop.
//!
//! [`color_updates`] wraps it into an Iced subscription. Iced keeps the stream
//! alive as long as the picker returns the same subscription, and dropping the
//! stream drops the [`ColorSubscription`], which releases it.

use super::component::{InstanceId, Message};
use crate::application::port::{BusError, EventBus, Listener, Unlisten};
use iced::futures::stream::{self, BoxStream};
use iced::Subscription;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

/// Name of the event carrying detected colors.
pub const COLOR_UPDATE_EVENT: &str = "color-update";

/// Observable lifecycle of a [`ColorSubscription`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    /// Registration has been requested but has not resolved yet.
    Acquiring,
    /// Released while acquiring; the listener is detached once registration resolves.
    ReleaseQueued,
    /// Registration is live and payloads are delivered.
    Subscribed,
    /// Terminal state: released, or registration failed.
    Unsubscribed,
}

/// Item produced by a [`ColorSubscription`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// A raw payload, not validated yet.
    Color(String),
    /// Registration failed; no payload will follow.
    Failed(BusError),
}

impl From<FeedEvent> for Message {
    fn from(event: FeedEvent) -> Self {
        match event {
            FeedEvent::Color(payload) => Message::ColorReceived(payload),
            FeedEvent::Failed(err) => Message::FeedFailed(err),
        }
    }
}

enum Phase {
    Acquiring { release_queued: bool },
    Subscribed(Unlisten),
    Unsubscribed,
}

type Registration = Result<mpsc::UnboundedReceiver<String>, BusError>;

/// Scoped registration on the color event channel.
pub struct ColorSubscription {
    event: &'static str,
    phase: Arc<Mutex<Phase>>,
    ready: Option<oneshot::Receiver<Registration>>,
    events: Option<mpsc::UnboundedReceiver<String>>,
}

impl ColorSubscription {
    /// Starts registering on `bus` for `event`.
    ///
    /// Must be called from within a Tokio runtime: the registration is
    /// awaited on a spawned task so that it can complete (and be released)
    /// even if this handle is dropped first.
    #[must_use]
    pub fn acquire(bus: &dyn EventBus, event: &'static str) -> Self {
        let phase = Arc::new(Mutex::new(Phase::Acquiring {
            release_queued: false,
        }));
        let (ready_tx, ready_rx) = oneshot::channel();
        let registration = bus.listen(event);
        let shared = Arc::clone(&phase);

        tokio::spawn(async move {
            let outcome = registration.await;
            complete(&shared, event, outcome, ready_tx);
        });
        log::debug!("Acquiring {event} subscription");

        Self {
            event,
            phase,
            ready: Some(ready_rx),
            events: None,
        }
    }

    /// Waits for the next payload.
    ///
    /// Yields [`FeedEvent::Failed`] once if registration fails. Returns `None`
    /// after release or when the channel closes.
    pub async fn next_event(&mut self) -> Option<FeedEvent> {
        if let Some(ready) = self.ready.take() {
            match ready.await {
                Ok(Ok(events)) => self.events = Some(events),
                Ok(Err(err)) => return Some(FeedEvent::Failed(err)),
                // The acquisition task was dropped with the runtime.
                Err(_) => return None,
            }
        }

        let payload = self.events.as_mut()?.recv().await?;
        Some(FeedEvent::Color(payload))
    }

    /// Releases the registration.
    ///
    /// Returns `true` only for the call that detached the listener or queued
    /// its detachment; later calls are no-ops.
    pub fn release(&mut self) -> bool {
        // Payloads already buffered are discarded with the receiver.
        self.ready = None;
        self.events = None;

        let mut phase = lock(&self.phase);
        match std::mem::replace(&mut *phase, Phase::Unsubscribed) {
            Phase::Acquiring {
                release_queued: false,
            } => {
                *phase = Phase::Acquiring {
                    release_queued: true,
                };
                log::debug!("Release of {} queued until acquisition completes", self.event);
                true
            }
            Phase::Acquiring {
                release_queued: true,
            } => {
                *phase = Phase::Acquiring {
                    release_queued: true,
                };
                false
            }
            Phase::Subscribed(unlisten) => {
                unlisten.invoke();
                log::info!("Unsubscribed from {}", self.event);
                true
            }
            Phase::Unsubscribed => false,
        }
    }

    #[must_use]
    pub fn status(&self) -> SubscriptionStatus {
        match &*lock(&self.phase) {
            Phase::Acquiring {
                release_queued: false,
            } => SubscriptionStatus::Acquiring,
            Phase::Acquiring {
                release_queued: true,
            } => SubscriptionStatus::ReleaseQueued,
            Phase::Subscribed(_) => SubscriptionStatus::Subscribed,
            Phase::Unsubscribed => SubscriptionStatus::Unsubscribed,
        }
    }
}

impl Drop for ColorSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ColorSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorSubscription")
            .field("event", &self.event)
            .field("status", &self.status())
            .finish()
    }
}

/// Settles the phase once registration resolves.
fn complete(
    phase: &Mutex<Phase>,
    event: &str,
    outcome: Result<Listener, BusError>,
    ready: oneshot::Sender<Registration>,
) {
    let mut phase = lock(phase);

    match outcome {
        Ok(listener) => {
            let (events, unlisten) = listener.into_parts();
            if matches!(
                *phase,
                Phase::Acquiring {
                    release_queued: true
                }
            ) {
                unlisten.invoke();
                *phase = Phase::Unsubscribed;
                log::debug!("Released {event} subscription right after acquisition");
                return;
            }

            *phase = Phase::Subscribed(unlisten);
            log::info!("Subscribed to {event}");
            // The handle may have been dropped meanwhile; its Drop then
            // finds `Subscribed` and detaches.
            let _ = ready.send(Ok(events));
        }
        Err(err) => {
            *phase = Phase::Unsubscribed;
            log::error!("Failed to subscribe to {event}: {err}");
            let _ = ready.send(Err(err));
        }
    }
}

fn lock(phase: &Mutex<Phase>) -> MutexGuard<'_, Phase> {
    phase.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// Iced subscription
// =============================================================================

/// Identity of a picker's feed: one per (bus, mounted instance).
#[derive(Clone)]
struct ColorFeedId {
    bus: Arc<dyn EventBus>,
    instance: InstanceId,
}

impl Hash for ColorFeedId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.bus) as *const ()).hash(state);
        self.instance.hash(state);
    }
}

enum Feed {
    Idle(Arc<dyn EventBus>),
    Running(ColorSubscription),
}

/// Creates the subscription delivering `color-update` payloads to a picker.
pub fn color_updates(bus: &Arc<dyn EventBus>, instance: InstanceId) -> Subscription<Message> {
    Subscription::run_with(
        ColorFeedId {
            bus: Arc::clone(bus),
            instance,
        },
        build_color_stream,
    )
}

fn build_color_stream(id: &ColorFeedId) -> BoxStream<'static, Message> {
    Box::pin(stream::unfold(
        Feed::Idle(Arc::clone(&id.bus)),
        |feed| async move {
            // Acquire on first poll, when the stream runs on the Tokio executor.
            let mut subscription = match feed {
                Feed::Idle(bus) => ColorSubscription::acquire(bus.as_ref(), COLOR_UPDATE_EVENT),
                Feed::Running(subscription) => subscription,
            };

            let event = subscription.next_event().await?;
            Some((Message::from(event), Feed::Running(subscription)))
        },
    ))
}
