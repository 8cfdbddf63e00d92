// SPDX-License-Identifier: MPL-2.0
//! Color picker component: state, messages and update logic.

use super::confirmation::{Confirmation, ConfirmationDelay, Ticket};
use super::subscription::color_updates;
use super::view::{self, ViewContext};
use crate::application::port::{BusError, ClipboardError, ClipboardWriter, EventBus};
use crate::domain::color::{classify, HexColor};
use crate::i18n::fluent::I18n;
use iced::{Element, Subscription, Task};
use std::fmt;
use std::sync::Arc;

/// Unique identifier of a mounted picker.
///
/// A re-created picker gets a new id, and with it a new color subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Creates a new unique instance ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages handled by the picker.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw payload received on the color channel.
    ColorReceived(String),
    /// The color channel could not be subscribed to.
    FeedFailed(BusError),
    /// The user pressed the copy button.
    CopyRequested,
    /// The clipboard write of the copy identified by the ticket finished.
    CopyFinished(Ticket, Result<(), ClipboardError>),
    /// The confirmation window of a copy elapsed.
    ConfirmationExpired(Ticket),
}

/// Copy started by [`Message::CopyRequested`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingCopy {
    /// Ticket of the confirmation window this copy opened.
    ticket: Ticket,
    /// Text handed to the clipboard.
    text: String,
}

/// Picker state, exclusively owned by the mounted component.
pub struct State {
    instance: InstanceId,
    color: HexColor,
    is_light: bool,
    confirmation: Confirmation,
    copy_error: Option<ClipboardError>,
    rejected: Option<String>,
    feed_error: Option<BusError>,
    mounted: bool,
    clipboard: Arc<dyn ClipboardWriter>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("instance", &self.instance)
            .field("color", &self.color)
            .field("is_light", &self.is_light)
            .field("confirmation", &self.confirmation)
            .field("copy_error", &self.copy_error)
            .field("rejected", &self.rejected)
            .field("feed_error", &self.feed_error)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Mounts a picker showing the default color.
    #[must_use]
    pub fn new(clipboard: Arc<dyn ClipboardWriter>, delay: ConfirmationDelay) -> Self {
        let color = HexColor::default();
        let is_light = classify(color.as_str());
        let instance = InstanceId::new();
        log::debug!("Mounted color picker {instance:?}");

        Self {
            instance,
            color,
            is_light,
            confirmation: Confirmation::new(delay),
            copy_error: None,
            rejected: None,
            feed_error: None,
            mounted: true,
            clipboard,
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        if !self.mounted {
            log::debug!("Ignoring {message:?} after teardown");
            return Task::none();
        }

        match message {
            Message::ColorReceived(payload) => {
                self.receive_color(&payload);
                Task::none()
            }
            Message::FeedFailed(err) => {
                self.feed_error = Some(err);
                Task::none()
            }
            Message::CopyRequested => self.start_copy().1,
            Message::CopyFinished(ticket, result) => {
                self.finish_copy(ticket, result);
                Task::none()
            }
            Message::ConfirmationExpired(ticket) => {
                if self.confirmation.expire(ticket) {
                    self.copy_error = None;
                }
                Task::none()
            }
        }
    }

    /// Validates `payload` and makes it the current color.
    ///
    /// Malformed payloads are recorded and otherwise ignored. Returns true if
    /// the color was accepted.
    pub fn receive_color(&mut self, payload: &str) -> bool {
        match HexColor::parse(payload) {
            Ok(color) => {
                self.is_light = classify(color.as_str());
                log::debug!("Detected {color} (light: {})", self.is_light);
                self.color = color;
                self.rejected = None;
                true
            }
            Err(err) => {
                log::warn!("Rejected color payload {payload:?}: {err}");
                self.rejected = Some(payload.to_string());
                false
            }
        }
    }

    /// Shows the badge and plans the clipboard write of the current color.
    ///
    /// The returned task runs the write and the expiry of the new ticket.
    fn start_copy(&mut self) -> (PendingCopy, Task<Message>) {
        self.copy_error = None;
        let (ticket, expiry) = self.confirmation.trigger();
        let pending = PendingCopy {
            ticket,
            text: self.color.as_str().to_owned(),
        };

        let write = Task::perform(
            copy_to_clipboard(Arc::clone(&self.clipboard), pending.text.clone()),
            move |result| Message::CopyFinished(ticket, result),
        );

        (
            pending,
            Task::batch([write, expiry.map(Message::ConfirmationExpired)]),
        )
    }

    fn finish_copy(&mut self, ticket: Ticket, result: Result<(), ClipboardError>) {
        match result {
            Ok(()) => log::info!("Copied {} to the clipboard", self.color),
            // A newer copy owns the badge now.
            Err(err) if !self.confirmation.is_current(ticket) => {
                log::warn!("Earlier clipboard write failed: {err}");
            }
            Err(err) => {
                log::warn!("Failed to copy {}: {err}", self.color);
                self.confirmation.hide();
                self.copy_error = Some(err);
            }
        }
    }

    /// Unmounts the picker: cancels the pending confirmation and stops
    /// processing colors. Its subscription is dropped with the next
    /// [`State::subscription`] call.
    ///
    /// Returns false if the picker was already torn down.
    pub fn teardown(&mut self) -> bool {
        if !self.mounted {
            return false;
        }

        self.mounted = false;
        self.confirmation.cancel();
        self.copy_error = None;
        log::info!("Unmounted color picker {:?}", self.instance);
        true
    }

    /// Subscribes to detected colors on `bus` while mounted.
    pub fn subscription(&self, bus: &Arc<dyn EventBus>) -> Subscription<Message> {
        if self.mounted {
            color_updates(bus, self.instance)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        view::view(ViewContext {
            i18n,
            color: &self.color,
            is_light: self.is_light,
            copied: self.confirmation.is_visible(),
            copy_error: self.copy_error.as_ref(),
            rejected: self.rejected.as_deref(),
            feed_error: self.feed_error.as_ref(),
        })
    }

    #[must_use]
    pub fn color(&self) -> &HexColor {
        &self.color
    }

    /// Returns true when the current color needs the dark card.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.is_light
    }

    /// Returns true while the "copied" badge is shown.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.confirmation.is_visible()
    }

    #[must_use]
    pub fn copy_error(&self) -> Option<&ClipboardError> {
        self.copy_error.as_ref()
    }

    /// Last malformed payload received since the last accepted color.
    #[must_use]
    pub fn rejected_payload(&self) -> Option<&str> {
        self.rejected.as_deref()
    }

    #[must_use]
    pub fn feed_error(&self) -> Option<&BusError> {
        self.feed_error.as_ref()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    #[must_use]
    pub fn confirmation_delay(&self) -> ConfirmationDelay {
        self.confirmation.delay()
    }
}

/// Writes `text` through `clipboard` on a blocking thread.
///
/// # Errors
///
/// Returns the clipboard error, or [`ClipboardError::WriteFailed`] if the
/// blocking task panicked.
pub async fn copy_to_clipboard(
    clipboard: Arc<dyn ClipboardWriter>,
    text: String,
) -> Result<(), ClipboardError> {
    tokio::task::spawn_blocking(move || clipboard.write_text(&text))
        .await
        .unwrap_or_else(|err| Err(ClipboardError::WriteFailed(err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingClipboard;

    fn picker() -> State {
        State::new(Arc::new(RecordingClipboard::new()), ConfirmationDelay::default())
    }

    fn copy(state: &mut State) -> Ticket {
        state.start_copy().0.ticket
    }

    #[test]
    fn mounts_with_white_and_white_is_light() {
        let state = picker();
        assert_eq!(state.color().as_str(), "#FFFFFF");
        assert!(state.is_light());
        assert!(!state.is_copied());
        assert!(state.is_mounted());
    }

    #[test]
    fn accepted_payload_replaces_color_and_theme() {
        let mut state = picker();

        let _ = state.handle_message(Message::ColorReceived("#000000".into()));
        assert_eq!(state.color().as_str(), "#000000");
        assert!(!state.is_light());

        let _ = state.handle_message(Message::ColorReceived("#FFFFFF".into()));
        assert_eq!(state.color().as_str(), "#FFFFFF");
        assert!(state.is_light());
    }

    #[test]
    fn lowercase_payload_is_kept_verbatim() {
        let mut state = picker();
        assert!(state.receive_color("#c9c9c9"));
        assert_eq!(state.color().as_str(), "#c9c9c9");
        assert!(state.is_light());
    }

    #[test]
    fn malformed_payload_leaves_state_untouched() {
        let mut state = picker();
        state.receive_color("#123456");

        assert!(!state.receive_color("garbage"));
        assert_eq!(state.color().as_str(), "#123456");
        assert!(!state.is_light());
        assert_eq!(state.rejected_payload(), Some("garbage"));

        state.receive_color("#654321");
        assert_eq!(state.rejected_payload(), None);
    }

    #[test]
    fn copy_shows_badge_immediately() {
        let mut state = picker();
        let _ = state.handle_message(Message::CopyRequested);
        assert!(state.is_copied());
    }

    #[test]
    fn copy_writes_current_color_and_schedules_its_expiry() {
        let mut state = picker();
        state.receive_color("#1A2B3C");

        let (pending, task) = state.start_copy();
        assert_eq!(pending.text, "#1A2B3C");
        assert!(state.confirmation.is_current(pending.ticket));
        // Clipboard write plus confirmation expiry.
        assert_eq!(task.units(), 2);

        let (second, _) = state.start_copy();
        assert_ne!(second.ticket, pending.ticket);
        assert!(!state.confirmation.is_current(pending.ticket));
    }

    #[test]
    fn expiry_of_latest_copy_hides_badge() {
        let mut state = picker();
        let ticket = copy(&mut state);

        let _ = state.handle_message(Message::ConfirmationExpired(ticket));
        assert!(!state.is_copied());
    }

    #[test]
    fn failed_copy_replaces_badge_with_error() {
        let mut state = picker();
        let ticket = copy(&mut state);

        let _ = state.handle_message(Message::CopyFinished(
            ticket,
            Err(ClipboardError::Unavailable("no display".into())),
        ));
        assert!(!state.is_copied());
        assert_eq!(
            state.copy_error(),
            Some(&ClipboardError::Unavailable("no display".into()))
        );

        let _ = state.handle_message(Message::ConfirmationExpired(ticket));
        assert_eq!(state.copy_error(), None);
    }

    #[test]
    fn stale_copy_failure_keeps_newer_badge() {
        let mut state = picker();
        let first = copy(&mut state);
        let _second = copy(&mut state);

        let _ = state.handle_message(Message::CopyFinished(
            first,
            Err(ClipboardError::WriteFailed("busy".into())),
        ));
        assert!(state.is_copied());
        assert_eq!(state.copy_error(), None);
    }

    #[test]
    fn feed_failure_is_recorded() {
        let mut state = picker();
        let _ = state.handle_message(Message::FeedFailed(BusError::Closed));
        assert_eq!(state.feed_error(), Some(&BusError::Closed));
    }

    #[test]
    fn teardown_is_idempotent_and_freezes_state() {
        let mut state = picker();
        let ticket = copy(&mut state);

        assert!(state.teardown());
        assert!(!state.teardown());
        assert!(!state.is_copied());

        let _ = state.handle_message(Message::ColorReceived("#000000".into()));
        let _ = state.handle_message(Message::ConfirmationExpired(ticket));
        assert_eq!(state.color().as_str(), "#FFFFFF");
        assert!(state.is_light());
    }

    #[test]
    fn instances_are_unique() {
        assert_ne!(picker().instance(), picker().instance());
    }

    #[tokio::test]
    async fn copy_to_clipboard_writes_text() {
        let clipboard = Arc::new(RecordingClipboard::new());
        let result = copy_to_clipboard(clipboard.clone(), "#ABCDEF".into()).await;

        assert_eq!(result, Ok(()));
        assert_eq!(clipboard.writes(), vec!["#ABCDEF".to_string()]);
    }

    #[tokio::test]
    async fn copy_to_clipboard_reports_failure() {
        let clipboard = Arc::new(RecordingClipboard::failing(ClipboardError::WriteFailed(
            "denied".into(),
        )));
        let result = copy_to_clipboard(clipboard.clone(), "#ABCDEF".into()).await;

        assert_eq!(result, Err(ClipboardError::WriteFailed("denied".into())));
        assert!(clipboard.writes().is_empty());
    }
}
