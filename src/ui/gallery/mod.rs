// SPDX-License-Identifier: MPL-2.0
//! Gallery component: request lifecycle and the card grid.
//!
//! The gallery owns the display cycle of one range query: idle (space fact),
//! loading, loaded cards, or a generic failure message. Every query bumps a
//! generation counter; results tagged with an older generation are discarded
//! so a re-triggered query cannot be overwritten by a slow predecessor —
//! latest user intent wins.

pub mod card;
pub mod loading;

pub use card::{Card, CardMedia};

use crate::apod::MediaEntry;
use crate::error::Error;
use crate::ui::design_tokens::{spacing, typography, CARDS_PER_ROW};
use iced::widget::{image, scrollable, text, Column, Container, Row};
use iced::{alignment, Element, Length};
use std::collections::HashMap;

/// User-facing copy for the three non-card display states.
pub const LOADING_MESSAGE: &str = "\u{1F504} Loading space photos";
pub const EMPTY_MESSAGE: &str = "No images or videos found for this date range.";
pub const ERROR_MESSAGE: &str = "Sorry, something went wrong. Please try again later.";

/// Messages emitted by the gallery view.
#[derive(Debug, Clone)]
pub enum Message {
    /// A card was activated by pointer or keyboard.
    CardPressed(usize),
}

/// Follow-up work the orchestrator must perform after applying a result.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Fetch thumbnails for these `(date, url)` pairs.
    FetchThumbnails(Vec<(String, String)>),
}

#[derive(Debug, Clone)]
enum Phase {
    /// Nothing fetched yet; shows the space fact.
    Idle,
    Loading(loading::State),
    Loaded {
        cards: Vec<Card>,
        /// Fetched thumbnails keyed by entry date.
        thumbnails: HashMap<String, image::Handle>,
    },
    Failed,
}

/// Gallery state for the current display cycle. Results are ephemeral: each
/// new query or failure discards the previous batch.
#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    /// Generation of the most recent query.
    generation: u64,
    /// Space fact shown in the idle state, picked at startup.
    fact: &'static str,
}

impl State {
    pub fn new(fact: &'static str) -> Self {
        Self {
            phase: Phase::Idle,
            generation: 0,
            fact,
        }
    }

    /// Starts a new display cycle and returns the generation tag the caller
    /// must attach to the outgoing request.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = Phase::Loading(loading::State::default());
        self.generation
    }

    /// Whether a tagged result belongs to the most recent query.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Applies the outcome of a range query. Stale generations are dropped
    /// without touching the display.
    pub fn apply_entries(
        &mut self,
        generation: u64,
        result: Result<Vec<MediaEntry>, Error>,
    ) -> Effect {
        if !self.is_current(generation) {
            return Effect::None;
        }

        match result {
            Ok(entries) => {
                let cards: Vec<Card> = entries.iter().filter_map(Card::from_entry).collect();
                let pending: Vec<(String, String)> = cards
                    .iter()
                    .filter_map(|card| match &card.media {
                        CardMedia::Image { thumbnail_url } => {
                            Some((card.date.clone(), thumbnail_url.clone()))
                        }
                        _ => None,
                    })
                    .collect();

                self.phase = Phase::Loaded {
                    cards,
                    thumbnails: HashMap::new(),
                };

                if pending.is_empty() {
                    Effect::None
                } else {
                    Effect::FetchThumbnails(pending)
                }
            }
            Err(_) => {
                self.phase = Phase::Failed;
                Effect::None
            }
        }
    }

    /// Stores a fetched thumbnail. Dropped if the generation is stale or the
    /// batch has since been replaced.
    pub fn thumbnail_loaded(&mut self, generation: u64, date: String, handle: image::Handle) {
        if !self.is_current(generation) {
            return;
        }
        if let Phase::Loaded { thumbnails, .. } = &mut self.phase {
            thumbnails.insert(date, handle);
        }
    }

    /// Advances the loading animation.
    pub fn tick(&mut self) {
        if let Phase::Loading(loading) = &mut self.phase {
            loading.tick();
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    /// The record behind a card index, for opening the detail overlay.
    #[must_use]
    pub fn entry_at(&self, index: usize) -> Option<&MediaEntry> {
        match &self.phase {
            Phase::Loaded { cards, .. } => cards.get(index).map(|card| &card.entry),
            _ => None,
        }
    }

    /// Cards of the current batch, in response order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match &self.phase {
            Phase::Loaded { cards, .. } => cards,
            _ => &[],
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.phase {
            Phase::Idle => {
                let fact_header = text("\u{1F30C} Did you know?").size(typography::TITLE);
                let fact_body = text(self.fact)
                    .size(typography::BODY)
                    .align_x(alignment::Horizontal::Center);
                centered(
                    Column::new()
                        .spacing(spacing::SM)
                        .align_x(alignment::Horizontal::Center)
                        .push(fact_header)
                        .push(fact_body)
                        .into(),
                )
            }
            Phase::Loading(loading) => centered(
                text(format!("{LOADING_MESSAGE}{}", loading.dots()))
                    .size(typography::SUBTITLE)
                    .into(),
            ),
            Phase::Failed => centered(text(ERROR_MESSAGE).size(typography::SUBTITLE).into()),
            Phase::Loaded { cards, thumbnails } => {
                if cards.is_empty() {
                    return centered(text(EMPTY_MESSAGE).size(typography::SUBTITLE).into());
                }

                let mut grid = Column::new().spacing(spacing::MD);
                for (row_index, chunk) in cards.chunks(CARDS_PER_ROW).enumerate() {
                    let mut row = Row::new().spacing(spacing::MD);
                    for (col_index, card) in chunk.iter().enumerate() {
                        let index = row_index * CARDS_PER_ROW + col_index;
                        row = row.push(card::view(index, card, thumbnails.get(&card.date)));
                    }
                    grid = grid.push(row);
                }

                scrollable(
                    Container::new(grid)
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Center)
                        .padding(spacing::LG),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
            }
        }
    }
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::MediaType;

    fn image_entry(date: &str, title: &str) -> MediaEntry {
        MediaEntry {
            media_type: MediaType::Image,
            title: title.to_string(),
            date: date.to_string(),
            url: format!("https://example.org/{date}.jpg"),
            hdurl: None,
            explanation: None,
        }
    }

    fn other_entry(date: &str) -> MediaEntry {
        MediaEntry {
            media_type: MediaType::Other,
            title: "?".to_string(),
            date: date.to_string(),
            url: String::new(),
            hdurl: None,
            explanation: None,
        }
    }

    #[test]
    fn begin_load_bumps_generation_and_enters_loading() {
        let mut state = State::new("fact");
        let first = state.begin_load();
        let second = state.begin_load();
        assert!(second > first);
        assert!(state.is_loading());
        assert!(state.is_current(second));
        assert!(!state.is_current(first));
    }

    #[test]
    fn entries_build_cards_in_response_order() {
        let mut state = State::new("fact");
        let generation = state.begin_load();
        let entries = vec![
            image_entry("2020-01-01", "First"),
            image_entry("2020-01-02", "Second"),
            image_entry("2020-01-03", "Third"),
        ];

        let effect = state.apply_entries(generation, Ok(entries));

        let titles: Vec<&str> = state.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
        match effect {
            Effect::FetchThumbnails(pending) => assert_eq!(pending.len(), 3),
            Effect::None => panic!("expected thumbnail fetches"),
        }
    }

    #[test]
    fn stale_generation_result_is_discarded() {
        let mut state = State::new("fact");
        let stale = state.begin_load();
        let current = state.begin_load();

        let effect = state.apply_entries(stale, Ok(vec![image_entry("2020-01-01", "Old")]));
        assert_eq!(effect, Effect::None);
        assert!(state.is_loading(), "stale result must not end the newer load");

        state.apply_entries(current, Ok(vec![image_entry("2020-01-02", "New")]));
        assert_eq!(state.cards().len(), 1);
        assert_eq!(state.cards()[0].title, "New");
    }

    #[test]
    fn all_unrecognized_entries_yield_empty_batch() {
        let mut state = State::new("fact");
        let generation = state.begin_load();
        let effect = state.apply_entries(
            generation,
            Ok(vec![other_entry("2020-01-01"), other_entry("2020-01-02")]),
        );
        assert_eq!(effect, Effect::None);
        assert!(state.cards().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn failure_discards_the_whole_batch() {
        let mut state = State::new("fact");
        let generation = state.begin_load();
        state.apply_entries(generation, Ok(vec![image_entry("2020-01-01", "Kept")]));

        let generation = state.begin_load();
        state.apply_entries(generation, Err(Error::Status(500)));
        assert!(state.cards().is_empty());
    }

    #[test]
    fn stale_thumbnail_is_dropped() {
        let mut state = State::new("fact");
        let stale = state.begin_load();
        state.apply_entries(stale, Ok(vec![image_entry("2020-01-01", "A")]));

        let current = state.begin_load();
        state.apply_entries(current, Ok(vec![image_entry("2020-01-01", "A")]));

        let handle = image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);
        state.thumbnail_loaded(stale, "2020-01-01".to_string(), handle);
        match &state.phase {
            Phase::Loaded { thumbnails, .. } => assert!(thumbnails.is_empty()),
            _ => panic!("expected loaded phase"),
        }
    }

    #[test]
    fn entry_at_resolves_card_index() {
        let mut state = State::new("fact");
        let generation = state.begin_load();
        state.apply_entries(
            generation,
            Ok(vec![
                image_entry("2020-01-01", "First"),
                image_entry("2020-01-02", "Second"),
            ]),
        );

        assert_eq!(state.entry_at(1).map(|e| e.title.as_str()), Some("Second"));
        assert!(state.entry_at(5).is_none());
    }
}
