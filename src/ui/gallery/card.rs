// SPDX-License-Identifier: MPL-2.0
//! Typed card view-model and its rendering.
//!
//! `Card::from_entry` is a pure builder so the image/video/skip decision is
//! testable without a GUI; rendering only turns an already-built card into
//! widgets.

use crate::apod::{MediaEntry, MediaType, VideoSource};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, text, Column, Container};
use iced::{alignment, ContentFit, Element, Length, Theme};

use super::Message;

/// Media region of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMedia {
    /// Inline thumbnail fetched from the entry's `url`.
    Image { thumbnail_url: String },
    /// Recognized video host, normalized to its embed URL.
    VideoEmbed { embed_url: String },
    /// Unrecognized video host; only openable as an external link.
    VideoLink { url: String },
}

/// Compact per-entry display unit in the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub date: String,
    pub media: CardMedia,
    /// The full record, carried along so activation can populate the detail
    /// overlay without re-fetching.
    pub entry: MediaEntry,
}

impl Card {
    /// Builds the card for one record. Returns `None` for records that match
    /// neither media type, which therefore produce no card.
    pub fn from_entry(entry: &MediaEntry) -> Option<Self> {
        let media = match entry.media_type {
            MediaType::Image => CardMedia::Image {
                thumbnail_url: entry.url.clone(),
            },
            MediaType::Video => match VideoSource::classify(&entry.url) {
                VideoSource::Embed(embed_url) => CardMedia::VideoEmbed { embed_url },
                VideoSource::Link(url) => CardMedia::VideoLink { url },
            },
            MediaType::Other => return None,
        };

        Some(Self {
            title: entry.title.clone(),
            date: entry.date.clone(),
            media,
            entry: entry.clone(),
        })
    }
}

/// Renders one card as a button so activation works by pointer and by
/// keyboard (Enter/Space on the focused card).
pub fn view<'a>(
    index: usize,
    card: &'a Card,
    thumbnail: Option<&'a image::Handle>,
) -> Element<'a, Message> {
    let media_region: Element<'a, Message> = match &card.media {
        CardMedia::Image { .. } => match thumbnail {
            Some(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CARD_MEDIA_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
            None => placeholder("Loading image\u{2026}"),
        },
        CardMedia::VideoEmbed { .. } => placeholder("\u{25B6} Video"),
        CardMedia::VideoLink { .. } => placeholder("\u{25B6} Watch video"),
    };

    let title = text(card.title.as_str()).size(typography::SUBTITLE);
    let date = text(card.date.as_str())
        .size(typography::CAPTION)
        .style(|theme: &Theme| {
            let mut color = theme.extended_palette().background.base.text;
            color.a = opacity::MUTED;
            text::Style { color: Some(color) }
        });

    let content = Column::new()
        .spacing(spacing::XS)
        .push(media_region)
        .push(title)
        .push(date);

    button(content)
        .on_press(Message::CardPressed(index))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::button::card)
        .into()
}

fn placeholder<'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(
        text(label)
            .size(typography::BODY)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CARD_MEDIA_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::media_placeholder)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(media_type: &str, url: &str) -> MediaEntry {
        serde_json::from_str(&format!(
            r#"{{
                "media_type": "{media_type}",
                "title": "Test Title",
                "date": "2020-01-01",
                "url": "{url}"
            }}"#
        ))
        .expect("valid entry json")
    }

    #[test]
    fn image_entry_builds_image_card() {
        let card = Card::from_entry(&entry("image", "https://example.org/pic.jpg"))
            .expect("image entries produce a card");
        assert_eq!(
            card.media,
            CardMedia::Image {
                thumbnail_url: "https://example.org/pic.jpg".to_string()
            }
        );
        assert_eq!(card.title, "Test Title");
        assert_eq!(card.date, "2020-01-01");
    }

    #[test]
    fn youtube_video_builds_embed_card() {
        let card = Card::from_entry(&entry("video", "https://youtu.be/abc123"))
            .expect("video entries produce a card");
        assert_eq!(
            card.media,
            CardMedia::VideoEmbed {
                embed_url: "https://www.youtube.com/embed/abc123".to_string()
            }
        );
    }

    #[test]
    fn other_host_video_builds_link_card_not_embed() {
        let card = Card::from_entry(&entry("video", "https://example.org/clip.mp4"))
            .expect("video entries produce a card");
        assert_eq!(
            card.media,
            CardMedia::VideoLink {
                url: "https://example.org/clip.mp4".to_string()
            }
        );
    }

    #[test]
    fn unrecognized_media_type_produces_no_card() {
        assert!(Card::from_entry(&entry("hologram", "https://example.org/x")).is_none());
    }
}
