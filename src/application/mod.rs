// SPDX-License-Identifier: MPL-2.0
//! Application layer - Capabilities the color picker depends on.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer receives ports as injected `Arc<dyn …>` handles,
//!   so tests can substitute fakes for the clipboard and the event channel
//!
//! # Example
//!
//! ```ignore
//! use pixel_pickr::application::port::{ClipboardWriter, EventBus};
//! use pixel_pickr::infrastructure::{InProcessBus, SystemClipboard};
//! use std::sync::Arc;
//!
//! let bus: Arc<dyn EventBus> = Arc::new(InProcessBus::new());
//! let clipboard: Arc<dyn ClipboardWriter> = Arc::new(SystemClipboard::new());
//! ```

pub mod port;
