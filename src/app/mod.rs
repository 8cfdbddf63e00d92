// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the picker and its ports.
//!
//! The `App` struct owns the event channel, the clipboard adapter and the
//! mounted picker. Closing the window tears the picker down (its pending
//! confirmation is cancelled and its color subscription released) before
//! the application exits.

pub mod config;
mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::application::port::{ClipboardWriter, EventBus};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{stdin_feed, InProcessBus, SystemClipboard};
use crate::ui::design_tokens::sizing;
use crate::ui::picker::{self, COLOR_UPDATE_EVENT};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Resolved once at startup; `ThemeMode::System` queries the OS.
    theme: Theme,
    picker: picker::State,
    /// Producer side of the color channel.
    bus: InProcessBus,
    /// Same registry seen through the port; its identity keys the picker subscription.
    events: Arc<dyn EventBus>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme)
            .field("picker", &self.picker)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings: fixed 600×300, not resizable.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        resizable: false,
        // Close requests go through `Message::WindowCloseRequested`.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences, wires the system ports and mounts the picker.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let app = Self::with_ports(
            i18n,
            &config,
            InProcessBus::new(),
            Arc::new(SystemClipboard::new()),
        );

        if flags.read_stdin {
            match stdin_feed::spawn(app.bus.clone(), COLOR_UPDATE_EVENT) {
                Ok(_) => log::info!("Reading colors from standard input"),
                Err(err) => log::error!("Failed to start standard input feed: {err}"),
            }
        }

        (app, Task::none())
    }

    /// Builds the application around explicit ports.
    pub fn with_ports(
        i18n: I18n,
        config: &config::Config,
        bus: InProcessBus,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Self {
        let picker = picker::State::new(clipboard, config.feedback.confirmation_delay());

        Self {
            i18n,
            theme: config.general.theme_mode.theme(),
            picker,
            events: Arc::new(bus.clone()),
            bus,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_close_subscription(),
            self.picker
                .subscription(&self.events)
                .map(Message::Picker),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Picker(picker_message) => self
                .picker
                .handle_message(picker_message)
                .map(Message::Picker),
            Message::WindowCloseRequested(window_id) => {
                log::debug!("Close requested for window {window_id:?}");
                self.picker.teardown();
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.picker.view(&self.i18n).map(Message::Picker)
    }

    #[must_use]
    pub fn picker(&self) -> &picker::State {
        &self.picker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, FeedbackConfig, GeneralConfig};
    use crate::test_utils::RecordingClipboard;
    use crate::ui::theming::ThemeMode;

    fn app_with(config: &Config) -> App {
        App::with_ports(
            I18n::new(Some("en-US".into()), config),
            config,
            InProcessBus::new(),
            Arc::new(RecordingClipboard::new()),
        )
    }

    #[test]
    fn new_app_shows_default_color() {
        let app = app_with(&Config::default());
        assert_eq!(app.picker().color().as_str(), "#FFFFFF");
        assert!(app.picker().is_mounted());
        assert_eq!(app.title(), "PixelPickr");
    }

    #[test]
    fn config_drives_theme_and_delay() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
                ..GeneralConfig::default()
            },
            feedback: FeedbackConfig {
                confirmation_ms: Some(750),
            },
        };
        let app = app_with(&config);

        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.picker().confirmation_delay().value(), 750);
    }

    #[test]
    fn picker_messages_are_forwarded() {
        let mut app = app_with(&Config::default());
        let _ = app.update(Message::Picker(picker::Message::ColorReceived(
            "#000000".into(),
        )));

        assert_eq!(app.picker().color().as_str(), "#000000");
        assert!(!app.picker().is_light());
    }

    #[test]
    fn close_request_tears_picker_down() {
        let mut app = app_with(&Config::default());
        let _ = app.update(Message::Picker(picker::Message::CopyRequested));
        assert!(app.picker().is_copied());

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(!app.picker().is_mounted());
        assert!(!app.picker().is_copied());

        let _ = app.update(Message::Picker(picker::Message::ColorReceived(
            "#000000".into(),
        )));
        assert_eq!(app.picker().color().as_str(), "#FFFFFF");
    }

    #[tokio::test]
    async fn producer_and_subscription_share_the_bus() {
        let app = app_with(&Config::default());
        let listener = app
            .events
            .listen(COLOR_UPDATE_EVENT)
            .await
            .expect("in-process registration succeeds");
        let (mut events, _unlisten) = listener.into_parts();

        assert_eq!(app.bus.emit(COLOR_UPDATE_EVENT, "#445566"), 1);
        assert_eq!(events.recv().await.as_deref(), Some("#445566"));
    }

    #[test]
    fn window_is_fixed_size() {
        let settings = window_settings();
        assert_eq!(settings.size, iced::Size::new(600.0, 300.0));
        assert!(!settings.resizable);
        assert!(!settings.exit_on_close_request);
    }
}
