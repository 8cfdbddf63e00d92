// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded at compile time from `assets/i18n/`
//! - Fallback to `en-US` when the requested locale is not bundled
//! - Missing keys render as `MISSING: <key>` so gaps are visible

pub mod fluent;
