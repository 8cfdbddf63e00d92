// SPDX-License-Identifier: MPL-2.0
//! Clipboard port definition.
//!
//! The copy action only sequences the confirmation badge around the write;
//! the write itself goes through [`ClipboardWriter`] so failures come back as
//! values instead of being swallowed.

/// Errors reported by a clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (no display server, sandbox, ...).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard was opened but rejected the text.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

impl ClipboardError {
    /// Returns the i18n message key shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ClipboardError::Unavailable(_) => "copy-error-unavailable",
            ClipboardError::WriteFailed(_) => "copy-error-write-failed",
        }
    }
}

/// Port for writing text to the clipboard.
///
/// Implementations may block; callers run them off the UI thread.
pub trait ClipboardWriter: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] if the clipboard cannot be opened or written.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
