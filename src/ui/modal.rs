// SPDX-License-Identifier: MPL-2.0
//! Detail overlay shown when a card is activated.
//!
//! One reusable instance with two states, closed and open. Opening while
//! already open simply replaces the content. Dismissal (close control,
//! backdrop click, Escape) clears every populated field.

use crate::apod::{MediaEntry, MediaType, VideoSource};
use crate::error::Error;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, scrollable, text, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};

/// Fallback shown when a record carries no explanation.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Media region of the open overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Media {
    /// Full-resolution image bytes still in flight.
    ImageLoading,
    Image(image::Handle),
    /// The image fetch failed; the overlay stays open with text content.
    ImageUnavailable,
    Video(VideoSource),
}

#[derive(Debug, Clone, PartialEq)]
struct Content {
    entry: MediaEntry,
    media: Media,
}

/// Messages emitted by the overlay view.
#[derive(Debug, Clone)]
pub enum Message {
    ClosePressed,
    BackdropPressed,
    /// A click landed on the inner panel; swallowed so it does not reach the
    /// backdrop.
    PanelPressed,
    OpenVideoPressed(String),
}

/// Follow-up work for the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Hand this URL to the system browser.
    OpenUrl(String),
}

/// The single overlay instance. `content` empty means closed.
#[derive(Debug, Clone, Default)]
pub struct State {
    content: Option<Content>,
}

/// Fetch request produced by opening an image entry: the entry date (used to
/// drop stale results) and the URL to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRequest {
    pub date: String,
    pub url: String,
}

impl State {
    /// Opens (or re-populates) the overlay for `entry`.
    ///
    /// Image entries display the best available resolution, `hdurl` when
    /// present, and return the fetch request for it. Video entries resolve
    /// immediately to their classified source.
    pub fn open(&mut self, entry: MediaEntry) -> Option<MediaRequest> {
        let (media, request) = match entry.media_type {
            MediaType::Video => (Media::Video(VideoSource::classify(&entry.url)), None),
            _ => {
                let request = MediaRequest {
                    date: entry.date.clone(),
                    url: entry.hd_or_url().to_string(),
                };
                (Media::ImageLoading, Some(request))
            }
        };

        self.content = Some(Content { entry, media });
        request
    }

    /// Closes the overlay and clears all populated fields.
    pub fn close(&mut self) {
        self.content = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// Applies a fetched full-resolution image. Results for an entry that is
    /// no longer displayed are dropped.
    pub fn media_loaded(&mut self, date: &str, result: Result<image::Handle, Error>) {
        let Some(content) = &mut self.content else {
            return;
        };
        if content.entry.date != date {
            return;
        }
        content.media = match result {
            Ok(handle) => Media::Image(handle),
            Err(_) => Media::ImageUnavailable,
        };
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::ClosePressed | Message::BackdropPressed => {
                self.close();
                Effect::None
            }
            Message::PanelPressed => Effect::None,
            Message::OpenVideoPressed(url) => Effect::OpenUrl(url),
        }
    }

    /// Renders the overlay when open; `None` when closed.
    pub fn view(&self) -> Option<Element<'_, Message>> {
        let content = self.content.as_ref()?;

        let close = button(text("\u{2715}").size(typography::SUBTITLE))
            .on_press(Message::ClosePressed)
            .padding(spacing::XXS)
            .style(styles::button::overlay_close);

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                text(content.entry.title.as_str())
                    .size(typography::HEADLINE)
                    .width(Length::Fill),
            )
            .push(close);

        let date = text(content.entry.date.as_str())
            .size(typography::BODY)
            .style(|theme: &Theme| {
                let mut color = theme.extended_palette().background.base.text;
                color.a = opacity::MUTED;
                text::Style { color: Some(color) }
            });

        let media_region: Element<'_, Message> = match &content.media {
            Media::ImageLoading => media_note("Loading image\u{2026}"),
            Media::ImageUnavailable => media_note("Image could not be loaded."),
            Media::Image(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(360.0))
                .into(),
            Media::Video(source) => {
                let label = match source {
                    VideoSource::Embed(_) => "\u{25B6} Play video in browser",
                    VideoSource::Link(_) => "\u{25B6} Watch video",
                };
                Container::new(
                    button(text(label).size(typography::SUBTITLE))
                        .on_press(Message::OpenVideoPressed(source.url().to_string()))
                        .padding(spacing::SM)
                        .style(styles::button::primary),
                )
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .padding(spacing::LG)
                .into()
            }
        };

        let explanation = content
            .entry
            .explanation
            .as_deref()
            .unwrap_or(NO_DESCRIPTION);

        let panel = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(header)
                .push(date)
                .push(media_region)
                .push(
                    scrollable(text(explanation).size(typography::BODY))
                        .height(Length::Fixed(140.0)),
                ),
        )
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::overlay::panel);

        // Clicks on the panel are swallowed by the inner mouse area, so the
        // backdrop only reacts to clicks beside the panel.
        let panel_area = mouse_area(panel).on_press(Message::PanelPressed);

        let backdrop = Container::new(panel_area)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::XL)
            .style(styles::overlay::backdrop);

        Some(
            mouse_area(backdrop)
                .on_press(Message::BackdropPressed)
                .into(),
        )
    }

    #[cfg(test)]
    fn media(&self) -> Option<&Media> {
        self.content.as_ref().map(|c| &c.media)
    }
}

fn media_note<'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(text(label).size(typography::BODY))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL)
        .style(styles::container::media_placeholder)
        .into()
}
