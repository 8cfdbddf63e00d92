// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core color rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`color`]: Color value objects ([`HexColor`](color::HexColor), [`Rgb`](color::Rgb))
//!   and the perceived-brightness classifier ([`classify`](color::classify))

pub mod color;
