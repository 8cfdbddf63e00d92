// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap the system clipboard and the
//! in-process event channel the native eyedropper publishes on.
//!
//! # Available Adapters
//!
//! - [`clipboard`]: System clipboard via `arboard` (implements [`ClipboardWriter`])
//! - [`event_bus`]: In-process named channels (implements [`EventBus`])
//! - [`stdin_feed`]: Forwards colors piped on standard input to the bus
//!
//! [`ClipboardWriter`]: crate::application::port::ClipboardWriter
//! [`EventBus`]: crate::application::port::EventBus

pub mod clipboard;
pub mod event_bus;
pub mod stdin_feed;

// Re-export main types for convenience
pub use clipboard::SystemClipboard;
pub use event_bus::InProcessBus;
