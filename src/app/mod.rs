// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the catalog, the visible set, the lightbox state
//! machine, and the thumbnail store, and translates messages into side
//! effects like the startup catalog load, thumbnail fetches, transition
//! timers, and config persistence. Policy decisions (what happens to the
//! modal when a filter removes its selection, window sizing, persistence
//! format) stay close to the update loop so user-facing behavior is easy to
//! audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{self, ImageRecord};
use crate::config::{self, Config, ViewMode};
use crate::lightbox::Lightbox;
use crate::ui::gallery::Thumbnails;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    pub(crate) config: Config,
    /// Full ordered record set, built once at startup.
    pub(crate) catalog: Vec<ImageRecord>,
    /// Search-filtered subset of the catalog, order preserved.
    pub(crate) visible: Vec<ImageRecord>,
    pub(crate) search_term: String,
    pub(crate) view_mode: ViewMode,
    pub(crate) lightbox: Lightbox,
    pub(crate) thumbnails: Thumbnails,
    /// Whether the startup catalog load is still running.
    pub(crate) loading: bool,
    /// Shared HTTP client for thumbnail fetches.
    pub(crate) http: reqwest::Client,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("catalog_len", &self.catalog.len())
            .field("visible_len", &self.visible.len())
            .field("lightbox", &self.lightbox)
            .finish()
    }
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
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
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
    /// Creates the application state and kicks off the catalog load.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = match &flags.config_path {
            Some(path) => config::load_from_path(Path::new(path)).unwrap_or_else(|err| {
                eprintln!("Failed to load config from {}: {}", path, err);
                Config::default()
            }),
            None => config::load().unwrap_or_default(),
        };
        if let Some(base_url) = flags.base_url {
            config.base_url = base_url;
        }

        let view_mode = config.view_mode.unwrap_or_default();
        let load = Task::perform(
            catalog::loader::load_catalog(config.base_url.clone(), config.images.clone()),
            Message::CatalogLoaded,
        );

        let app = Self {
            config,
            catalog: Vec::new(),
            visible: Vec::new(),
            search_term: String::new(),
            view_mode,
            lightbox: Lightbox::default(),
            thumbnails: HashMap::new(),
            loading: true,
            http: reqwest::Client::new(),
        };

        (app, load)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn title(&self) -> String {
        String::from("Iced Gallery")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// The keyboard listener only exists while the lightbox has a selection.
    fn subscription(&self) -> Subscription<Message> {
        subscription::keyboard(&self.lightbox)
    }

    /// Recomputes the visible set after a term or catalog change and
    /// reconciles the lightbox with it.
    pub(crate) fn refresh_visible(&mut self) {
        self.visible = catalog::visible_records(&self.catalog, &self.search_term);
        self.lightbox.sync_with_visible(&self.visible);
    }

    /// The selected record and its position within the visible set.
    pub(crate) fn selected_record(&self) -> Option<(usize, &ImageRecord)> {
        let id = self.lightbox.selection()?;
        self.visible
            .iter()
            .enumerate()
            .find(|(_, record)| record.id == id)
    }
}
