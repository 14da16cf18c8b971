// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the filter bar, gallery,
//! and detail overlay.
//!
//! The `App` struct owns every piece of UI state explicitly (no globals) and
//! translates messages into side effects like archive queries and media
//! fetches. Construction happens once in `new`; everything else flows through
//! the single `update` entrypoint.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::apod::{client, request};
use crate::config;
use crate::daterange;
use crate::ui::facts;
use crate::ui::gallery;
use crate::ui::modal;
use chrono::Local;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state.
pub struct App {
    date_range: daterange::State,
    gallery: gallery::State,
    modal: modal::State,
    http: reqwest::Client,
    api_key: String,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
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
    /// Initializes application state from CLI flags and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(flags.config_dir.as_deref());
        let api_key = flags
            .api_key
            .or(config.api_key)
            .unwrap_or_else(|| request::DEMO_API_KEY.to_string());
        let range_days = config.range_days.unwrap_or(config::DEFAULT_RANGE_DAYS);
        let today = Local::now().date_naive();

        let app = App {
            date_range: daterange::State::new(today, range_days),
            gallery: gallery::State::new(facts::random_fact()),
            modal: modal::State::default(),
            http: client::build_client(),
            api_key,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        "APOD Gallery".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.modal.is_open()),
            subscription::create_tick_subscription(self.gallery.is_loading()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let ctx = update::UpdateContext {
            date_range: &mut self.date_range,
            gallery: &mut self.gallery,
            modal: &mut self.modal,
            http: &self.http,
            api_key: &self.api_key,
        };
        update::update(ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            date_range: &self.date_range,
            gallery: &self.gallery,
            modal: &self.modal,
        })
    }
}

fn load_config(config_dir: Option<&str>) -> config::Config {
    let result = match config_dir {
        Some(dir) => config::load_from_path(&Path::new(dir).join("settings.toml")),
        None => config::load(),
    };
    result.unwrap_or_else(|err| {
        eprintln!("Failed to load config, using defaults: {err}");
        config::Config::default()
    })
}
