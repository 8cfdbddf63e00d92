// SPDX-License-Identifier: MPL-2.0
//! End-to-end color flow: producer → bus → subscription → picker state.

use pixel_pickr::application::port::{BusError, ClipboardError};
use pixel_pickr::infrastructure::{stdin_feed, InProcessBus};
use pixel_pickr::test_utils::{FakeBus, RecordingClipboard};
use pixel_pickr::ui::picker::{
    copy_to_clipboard, ColorSubscription, Confirmation, ConfirmationDelay, Message, State,
    SubscriptionStatus, COLOR_UPDATE_EVENT,
};
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

fn picker(clipboard: Arc<RecordingClipboard>) -> State {
    State::new(clipboard, ConfirmationDelay::default())
}

/// Forwards the next subscription event to the picker.
async fn pump_one(subscription: &mut ColorSubscription, state: &mut State) {
    let event = subscription
        .next_event()
        .await
        .expect("subscription yields an event");
    let _ = state.handle_message(Message::from(event));
}

#[tokio::test]
async fn colors_flow_from_bus_to_picker() {
    let bus = InProcessBus::new();
    let mut state = picker(Arc::new(RecordingClipboard::new()));
    let mut subscription = ColorSubscription::acquire(&bus, COLOR_UPDATE_EVENT);

    // Registration on the in-process bus resolves on the first poll.
    while subscription.status() != SubscriptionStatus::Subscribed {
        tokio::task::yield_now().await;
    }

    bus.emit(COLOR_UPDATE_EVENT, "#000000");
    bus.emit(COLOR_UPDATE_EVENT, "not a color");
    bus.emit(COLOR_UPDATE_EVENT, "#FFFFFF");

    pump_one(&mut subscription, &mut state).await;
    assert_eq!(state.color().as_str(), "#000000");
    assert!(!state.is_light());

    pump_one(&mut subscription, &mut state).await;
    assert_eq!(state.color().as_str(), "#000000");
    assert_eq!(state.rejected_payload(), Some("not a color"));

    pump_one(&mut subscription, &mut state).await;
    assert_eq!(state.color().as_str(), "#FFFFFF");
    assert!(state.is_light());
}

#[tokio::test]
async fn stdin_lines_reach_the_picker() {
    let bus = InProcessBus::new();
    let mut state = picker(Arc::new(RecordingClipboard::new()));
    let mut subscription = ColorSubscription::acquire(&bus, COLOR_UPDATE_EVENT);
    while subscription.status() != SubscriptionStatus::Subscribed {
        tokio::task::yield_now().await;
    }

    let published = stdin_feed::pump(Cursor::new("#C9C9C9\n"), &bus, COLOR_UPDATE_EVENT);
    assert_eq!(published, 1);

    pump_one(&mut subscription, &mut state).await;
    assert_eq!(state.color().as_str(), "#C9C9C9");
    assert!(state.is_light());
}

#[tokio::test]
async fn no_mutation_after_teardown() {
    let bus = FakeBus::ready();
    let mut state = picker(Arc::new(RecordingClipboard::new()));
    let mut subscription = ColorSubscription::acquire(&bus, COLOR_UPDATE_EVENT);
    while subscription.status() != SubscriptionStatus::Subscribed {
        tokio::task::yield_now().await;
    }

    bus.emit(COLOR_UPDATE_EVENT, "#000000");
    assert!(state.teardown());
    assert!(subscription.release());

    assert_eq!(bus.emit(COLOR_UPDATE_EVENT, "#123456"), 0);
    assert!(subscription.next_event().await.is_none());

    // Even a late message does not change the color.
    let _ = state.handle_message(Message::ColorReceived("#000000".into()));
    assert_eq!(state.color().as_str(), "#FFFFFF");
    assert_eq!(bus.unlisten_calls(), 1);
}

#[tokio::test]
async fn teardown_during_acquisition_unsubscribes_once() {
    let bus = FakeBus::gated();
    let mut subscription = ColorSubscription::acquire(&bus, COLOR_UPDATE_EVENT);
    tokio::task::yield_now().await;

    assert!(subscription.release());
    assert_eq!(subscription.status(), SubscriptionStatus::ReleaseQueued);

    bus.open();
    while subscription.status() != SubscriptionStatus::Unsubscribed {
        tokio::task::yield_now().await;
    }
    drop(subscription);

    assert_eq!(bus.unlisten_calls(), 1);
    assert_eq!(bus.listener_count(COLOR_UPDATE_EVENT), 0);
}

#[tokio::test]
async fn feed_failure_reaches_the_picker() {
    let bus = FakeBus::failing(BusError::Registration("no eyedropper".into()));
    let mut state = picker(Arc::new(RecordingClipboard::new()));
    let mut subscription = ColorSubscription::acquire(&bus, COLOR_UPDATE_EVENT);

    pump_one(&mut subscription, &mut state).await;
    assert_eq!(
        state.feed_error(),
        Some(&BusError::Registration("no eyedropper".into()))
    );
    assert_eq!(state.color().as_str(), "#FFFFFF");
}

#[tokio::test]
async fn copy_request_shows_badge() {
    let clipboard = Arc::new(RecordingClipboard::new());
    let mut state = picker(Arc::clone(&clipboard));
    state.receive_color("#1A2B3C");

    let _ = state.handle_message(Message::CopyRequested);
    assert!(state.is_copied());
    assert_eq!(state.copy_error(), None);
}

#[tokio::test]
async fn clipboard_port_receives_text() {
    let clipboard = Arc::new(RecordingClipboard::new());
    let result = copy_to_clipboard(clipboard.clone(), "#1A2B3C".into()).await;

    assert_eq!(result, Ok(()));
    assert_eq!(clipboard.writes(), vec!["#1A2B3C".to_string()]);
}

#[tokio::test]
async fn failing_clipboard_reports_error() {
    let clipboard = Arc::new(RecordingClipboard::failing(ClipboardError::Unavailable(
        "headless".into(),
    )));
    let result = copy_to_clipboard(clipboard, "#000000".into()).await;
    assert_eq!(result, Err(ClipboardError::Unavailable("headless".into())));
}

#[tokio::test(start_paused = true)]
async fn second_copy_gets_a_full_window() {
    let mut confirmation = Confirmation::new(ConfirmationDelay::default());
    let first = confirmation.arm();
    let first_clear = tokio::spawn(pixel_pickr::ui::picker::confirmation::elapsed(
        Duration::from_millis(2000),
        first,
    ));
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(1500)).await;
    let second = confirmation.arm();
    let second_clear = tokio::spawn(pixel_pickr::ui::picker::confirmation::elapsed(
        Duration::from_millis(2000),
        second,
    ));
    tokio::task::yield_now().await;

    // The first clear fires but is stale.
    tokio::time::advance(Duration::from_millis(500)).await;
    let fired = first_clear.await.expect("timer task completes");
    assert!(!confirmation.expire(fired));
    assert!(confirmation.is_visible());

    tokio::time::advance(Duration::from_millis(1500)).await;
    let fired = second_clear.await.expect("timer task completes");
    assert!(confirmation.expire(fired));
    assert!(!confirmation.is_visible());
}
