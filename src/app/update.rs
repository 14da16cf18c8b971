// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Side effects (HTTP requests, launching the browser) are issued here as
//! Iced tasks; the components themselves stay pure and synchronous.

use super::Message;
use crate::apod::{client, request};
use crate::daterange;
use crate::ui::gallery;
use crate::ui::modal;
use iced::widget::image;
use iced::Task;

/// Mutable slices of `App` handed to the update entrypoint.
pub struct UpdateContext<'a> {
    pub date_range: &'a mut daterange::State,
    pub gallery: &'a mut gallery::State,
    pub modal: &'a mut modal::State,
    pub http: &'a reqwest::Client,
    pub api_key: &'a str,
}

pub fn update(ctx: UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::DateRange(msg) => {
            ctx.date_range.handle(msg);
            Task::none()
        }
        Message::GetImagesPressed => load_range(ctx),
        Message::EntriesLoaded { generation, result } => {
            if let Err(err) = &result {
                eprintln!("Archive request failed: {err}");
            }
            match ctx.gallery.apply_entries(generation, result) {
                gallery::Effect::FetchThumbnails(pending) => {
                    let http = ctx.http.clone();
                    Task::batch(pending.into_iter().map(|(date, url)| {
                        let http = http.clone();
                        Task::perform(client::fetch_bytes(http, url), move |result| {
                            Message::ThumbnailLoaded {
                                generation,
                                date: date.clone(),
                                result,
                            }
                        })
                    }))
                }
                gallery::Effect::None => Task::none(),
            }
        }
        Message::ThumbnailLoaded {
            generation,
            date,
            result,
        } => {
            match result {
                Ok(bytes) => {
                    ctx.gallery
                        .thumbnail_loaded(generation, date, image::Handle::from_bytes(bytes));
                }
                Err(err) => {
                    // The card keeps its placeholder; only the cause is logged.
                    eprintln!("Thumbnail fetch failed for {date}: {err}");
                }
            }
            Task::none()
        }
        Message::Gallery(gallery::Message::CardPressed(index)) => {
            let Some(entry) = ctx.gallery.entry_at(index).cloned() else {
                return Task::none();
            };
            match ctx.modal.open(entry) {
                Some(fetch) => {
                    let http = ctx.http.clone();
                    let date = fetch.date;
                    Task::perform(client::fetch_bytes(http, fetch.url), move |result| {
                        Message::ModalMediaLoaded {
                            date: date.clone(),
                            result,
                        }
                    })
                }
                None => Task::none(),
            }
        }
        Message::ModalMediaLoaded { date, result } => {
            if let Err(err) = &result {
                eprintln!("Full-resolution fetch failed for {date}: {err}");
            }
            ctx.modal
                .media_loaded(&date, result.map(image::Handle::from_bytes));
            Task::none()
        }
        Message::Modal(msg) => {
            match ctx.modal.handle(msg) {
                modal::Effect::OpenUrl(url) => {
                    if let Err(err) = open::that(&url) {
                        eprintln!("Failed to open browser for {url}: {err}");
                    }
                }
                modal::Effect::None => {}
            }
            Task::none()
        }
        Message::EscapePressed => {
            ctx.modal.close();
            Task::none()
        }
        Message::Tick(_) => {
            ctx.gallery.tick();
            Task::none()
        }
    }
}

/// Commits the date fields, switches the gallery to its loading state, and
/// issues the range query tagged with a fresh generation.
fn load_range(ctx: UpdateContext<'_>) -> Task<Message> {
    let (start, end) = ctx.date_range.commit();
    let generation = ctx.gallery.begin_load();
    let url = request::build_request_url(ctx.api_key, start, end);

    Task::perform(
        client::fetch_entries(ctx.http.clone(), url),
        move |result| Message::EntriesLoaded { generation, result },
    )
}
