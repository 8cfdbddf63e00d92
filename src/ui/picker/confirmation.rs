// SPDX-License-Identifier: MPL-2.0
//! "Color copied!" confirmation timer.
//!
//! Each copy shows the badge immediately and schedules a single deferred
//! clear. A new copy cancels the pending clear and restarts the window, so a
//! quick second copy never has its badge cleared early by the first one.
//! Every schedule carries a [`Ticket`]; only the latest ticket may clear the
//! badge, which also turns expiries that were already queued when the timer
//! was cancelled into no-ops.

use crate::config::{
    DEFAULT_CONFIRMATION_MS, MAX_CONFIRMATION_MS, MIN_CONFIRMATION_MS,
};
use iced::task::{self, Task};
use std::fmt;
use std::time::Duration;

/// How long the confirmation badge stays visible, in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500–10 000 ms).
///
/// # Example
///
/// ```
/// use pixel_pickr::ui::picker::ConfirmationDelay;
///
/// let delay = ConfirmationDelay::new(1500);
/// assert_eq!(delay.value(), 1500);
///
/// // Values outside range are clamped
/// let too_short = ConfirmationDelay::new(10);
/// assert_eq!(too_short.value(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationDelay(u64);

impl ConfirmationDelay {
    /// Creates a new delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_CONFIRMATION_MS, MAX_CONFIRMATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ConfirmationDelay {
    fn default() -> Self {
        Self(DEFAULT_CONFIRMATION_MS)
    }
}

/// Identifies one scheduled clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Visibility of the confirmation badge plus its pending clear.
#[derive(Default)]
pub struct Confirmation {
    visible: bool,
    delay: ConfirmationDelay,
    generation: u64,
    pending: Option<Ticket>,
    /// Aborts the scheduled clear when replaced or dropped.
    handle: Option<task::Handle>,
}

impl fmt::Debug for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Confirmation")
            .field("visible", &self.visible)
            .field("delay", &self.delay)
            .field("pending", &self.pending)
            .finish()
    }
}

impl Confirmation {
    #[must_use]
    pub fn new(delay: ConfirmationDelay) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Shows the badge and issues the ticket of the next clear.
    ///
    /// Any previously issued ticket becomes stale.
    pub fn arm(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        let ticket = Ticket(self.generation);
        self.visible = true;
        self.pending = Some(ticket);
        ticket
    }

    /// Shows the badge and schedules its clear after the configured delay.
    ///
    /// The previous scheduled clear, if any, is aborted. Returns the new
    /// ticket along with the task resolving to it.
    pub fn trigger(&mut self) -> (Ticket, Task<Ticket>) {
        let ticket = self.arm();
        let (task, handle) =
            Task::perform(elapsed(self.delay.as_duration(), ticket), std::convert::identity)
                .abortable();

        // Replacing the handle drops the previous one, which aborts it.
        self.handle = Some(handle.abort_on_drop());
        (ticket, task)
    }

    /// Returns true if `ticket` belongs to the scheduled clear.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.pending == Some(ticket)
    }

    /// Clears the badge if `ticket` is the latest one issued.
    ///
    /// Returns `false` for stale tickets, which leave the state untouched.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.visible = false;
        self.pending = None;
        self.handle = None;
        true
    }

    /// Hides the badge while keeping the pending clear alive.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Hides the badge, aborts the pending clear and invalidates its ticket.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.pending = None;
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true while a clear is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn delay(&self) -> ConfirmationDelay {
        self.delay
    }
}

/// Resolves to `ticket` once `delay` has elapsed.
pub async fn elapsed(delay: Duration, ticket: Ticket) -> Ticket {
    tokio::time::sleep(delay).await;
    ticket
}
