// SPDX-License-Identifier: MPL-2.0
//! Native event subscriptions for the application.

use super::Message;
use iced::{event, window, Subscription};

/// Turns window close requests into [`Message::WindowCloseRequested`], so the
/// picker can be torn down before the application exits.
pub fn create_close_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(window::Event::CloseRequested) = event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}
