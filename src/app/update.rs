// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::catalog::loader;
use crate::config::{self, defaults};
use crate::download;
use crate::ui::gallery;
use iced::widget::image;
use iced::Task;
use std::time::Duration;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(message) => handle_gallery(app, message),

        Message::CatalogLoaded(Ok(records)) => {
            app.loading = false;
            app.catalog = records;
            app.refresh_visible();
            fetch_thumbnails(app)
        }
        Message::CatalogLoaded(Err(err)) => {
            // The whole load sequence failed; fall back to the empty state.
            eprintln!("Failed to load catalog: {}", err);
            app.loading = false;
            app.catalog.clear();
            app.refresh_visible();
            Task::none()
        }

        Message::ThumbnailFetched { id, result } => {
            match result {
                Ok(bytes) => {
                    app.thumbnails.insert(id, Some(image::Handle::from_bytes(bytes)));
                }
                Err(err) => {
                    eprintln!("Failed to fetch image {}: {}", id, err);
                    app.thumbnails.insert(id, None);
                }
            }
            Task::none()
        }

        Message::TransitionFaded => {
            app.lightbox.advance(&app.visible);
            if app.lightbox.is_transitioning() {
                delay(defaults::TRANSITION_SETTLE_MS, Message::TransitionSettled)
            } else {
                // The selection left the visible set mid-transition and the
                // lightbox closed; there is nothing left to settle.
                Task::none()
            }
        }
        Message::TransitionSettled => {
            app.lightbox.finish();
            Task::none()
        }

        Message::DownloadFinished(Ok(Some(path))) => {
            eprintln!("Saved image to {}", path.display());
            Task::none()
        }
        Message::DownloadFinished(Ok(None)) => Task::none(),
        Message::DownloadFinished(Err(err)) => {
            eprintln!("Download failed: {}", err);
            Task::none()
        }
    }
}

fn handle_gallery(app: &mut App, message: gallery::Message) -> Task<Message> {
    match message {
        gallery::Message::SearchChanged(term) => {
            app.search_term = term;
            app.refresh_visible();
            Task::none()
        }
        gallery::Message::ViewModeSelected(mode) => {
            app.view_mode = mode;
            app.config.view_mode = Some(mode);
            if let Err(err) = config::save(&app.config) {
                eprintln!("Failed to save config: {}", err);
            }
            Task::none()
        }
        gallery::Message::RecordSelected(id) => {
            app.lightbox.open(id);
            Task::none()
        }
        gallery::Message::CloseRequested => {
            app.lightbox.close();
            Task::none()
        }
        gallery::Message::NavigateRequested(direction) => {
            if app.lightbox.request(direction) {
                delay(defaults::TRANSITION_FADE_MS, Message::TransitionFaded)
            } else {
                // Rejected: either nothing is selected or a transition is
                // already in flight.
                Task::none()
            }
        }
        gallery::Message::DownloadRequested => {
            let Some((_, record)) = app.selected_record() else {
                return Task::none();
            };
            Task::perform(
                download::save_with_dialog(record.clone()),
                Message::DownloadFinished,
            )
        }
    }
}

/// Spawns one byte fetch per catalog record.
fn fetch_thumbnails(app: &App) -> Task<Message> {
    let tasks = app.catalog.iter().map(|record| {
        let id = record.id;
        Task::perform(
            loader::fetch_image(app.http.clone(), record.src.clone()),
            move |result| Message::ThumbnailFetched { id, result },
        )
    });
    Task::batch(tasks)
}

/// One-shot timer driving a transition phase.
fn delay(ms: u64, message: Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(Duration::from_millis(ms)), move |_| {
        message.clone()
    })
}
