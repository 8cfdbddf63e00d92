// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//!
//! # Available Ports
//!
//! - [`clipboard`]: Writing text to the system clipboard
//! - [`events`]: Named, one-directional event channels (the `color-update` feed)
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so they can be shared with Iced tasks
//! - Methods return `Result` with explicit error types; nothing fails silently
//! - [`ClipboardWriter`] is synchronous and is run on a blocking thread by callers;
//!   [`EventBus::listen`] is asynchronous because registration may resolve late

pub mod clipboard;
pub mod events;

pub use clipboard::{ClipboardError, ClipboardWriter};
pub use events::{BusError, EventBus, Listener, Unlisten};
