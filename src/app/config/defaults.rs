// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Copy Confirmation Defaults
// ==========================================================================

/// How long the "Color copied!" badge stays visible (in milliseconds).
pub const DEFAULT_CONFIRMATION_MS: u64 = 2000;

/// Minimum confirmation duration (in milliseconds).
pub const MIN_CONFIRMATION_MS: u64 = 500;

/// Maximum confirmation duration (in milliseconds).
pub const MAX_CONFIRMATION_MS: u64 = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_CONFIRMATION_MS > 0);
    assert!(MIN_CONFIRMATION_MS <= DEFAULT_CONFIRMATION_MS);
    assert!(DEFAULT_CONFIRMATION_MS <= MAX_CONFIRMATION_MS);
};
