// SPDX-License-Identifier: MPL-2.0
//! System clipboard adapter backed by `arboard`.

use crate::application::port::{ClipboardError, ClipboardWriter};

/// Writes text to the OS clipboard.
///
/// A fresh `arboard` handle is opened for every write. On X11 and Wayland
/// `arboard` hands the selection over to the clipboard manager when the
/// handle is dropped, so the copied color survives.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        log::debug!("Copied {text} to the system clipboard");
        Ok(())
    }
}
