// SPDX-License-Identifier: MPL-2.0
//! Color picker: shows the latest detected color and copies it on demand.
//!
//! The component subscribes to the `color-update` channel while mounted,
//! picks a light or dark card from each color's perceived brightness, and
//! confirms copies with a badge that clears after a configurable delay.

pub mod component;
pub mod confirmation;
pub mod subscription;
pub mod view;

pub use component::{copy_to_clipboard, InstanceId, Message, State};
pub use confirmation::{Confirmation, ConfirmationDelay, Ticket};
pub use subscription::{
    color_updates, ColorSubscription, FeedEvent, SubscriptionStatus, COLOR_UPDATE_EVENT,
};
