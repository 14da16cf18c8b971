// SPDX-License-Identifier: MPL-2.0
//! Date range provider: two bounded date fields with archive-window clamping.
//!
//! The archive starts on 1995-06-16 and runs through today. Committed values
//! are clamped into that window; an unparseable field reverts to the previous
//! committed value. Start/end ordering is deliberately not corrected here —
//! the remote service rejects inverted ranges itself.

use chrono::{Days, NaiveDate};

/// First day of the archive.
pub const ARCHIVE_START: NaiveDate = match NaiveDate::from_ymd_opt(1995, 6, 16) {
    Some(date) => date,
    None => panic!("archive start date is valid"),
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Committed and in-edit state of the two date fields.
#[derive(Debug, Clone)]
pub struct State {
    today: NaiveDate,
    start: NaiveDate,
    end: NaiveDate,
    start_input: String,
    end_input: String,
}

/// Messages for the date range fields.
#[derive(Debug, Clone)]
pub enum Message {
    StartEdited(String),
    EndEdited(String),
    StartCommitted,
    EndCommitted,
}

impl State {
    /// Creates the provider with a trailing window of `range_days` days
    /// ending at `today`.
    pub fn new(today: NaiveDate, range_days: i64) -> Self {
        let days = Days::new(range_days.max(0) as u64);
        let start = today.checked_sub_days(days).unwrap_or(ARCHIVE_START);
        let start = clamp(start, today);
        Self {
            today,
            start,
            end: today,
            start_input: start.format(DATE_FORMAT).to_string(),
            end_input: today.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::StartEdited(value) => self.start_input = value,
            Message::EndEdited(value) => self.end_input = value,
            Message::StartCommitted => {
                if let Ok(date) = NaiveDate::parse_from_str(&self.start_input, DATE_FORMAT) {
                    self.start = clamp(date, self.today);
                }
                self.start_input = self.start.format(DATE_FORMAT).to_string();
            }
            Message::EndCommitted => {
                if let Ok(date) = NaiveDate::parse_from_str(&self.end_input, DATE_FORMAT) {
                    self.end = clamp(date, self.today);
                }
                self.end_input = self.end.format(DATE_FORMAT).to_string();
            }
        }
    }

    /// Commits any pending edits and returns the bound pair for URL building.
    pub fn commit(&mut self) -> (NaiveDate, NaiveDate) {
        self.handle(Message::StartCommitted);
        self.handle(Message::EndCommitted);
        (self.start, self.end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Current text of the start field, for rendering.
    pub fn start_input(&self) -> &str {
        &self.start_input
    }

    /// Current text of the end field, for rendering.
    pub fn end_input(&self) -> &str {
        &self.end_input
    }
}

fn clamp(date: NaiveDate, today: NaiveDate) -> NaiveDate {
    date.clamp(ARCHIVE_START, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn defaults_to_trailing_window() {
        let state = State::new(date(2024, 3, 20), 9);
        assert_eq!(state.start(), date(2024, 3, 11));
        assert_eq!(state.end(), date(2024, 3, 20));
        assert_eq!(state.start_input(), "2024-03-11");
        assert_eq!(state.end_input(), "2024-03-20");
    }

    #[test]
    fn commit_parses_edited_fields() {
        let mut state = State::new(date(2024, 3, 20), 9);
        state.handle(Message::StartEdited("2020-01-01".to_string()));
        state.handle(Message::EndEdited("2020-01-03".to_string()));
        let (start, end) = state.commit();
        assert_eq!(start, date(2020, 1, 1));
        assert_eq!(end, date(2020, 1, 3));
    }

    #[test]
    fn unparseable_edit_reverts_to_previous_value() {
        let mut state = State::new(date(2024, 3, 20), 9);
        state.handle(Message::StartEdited("yesterday".to_string()));
        state.handle(Message::StartCommitted);
        assert_eq!(state.start(), date(2024, 3, 11));
        assert_eq!(state.start_input(), "2024-03-11");
    }

    #[test]
    fn commit_clamps_to_archive_window() {
        let mut state = State::new(date(2024, 3, 20), 9);
        state.handle(Message::StartEdited("1990-01-01".to_string()));
        state.handle(Message::EndEdited("2030-01-01".to_string()));
        let (start, end) = state.commit();
        assert_eq!(start, ARCHIVE_START);
        assert_eq!(end, date(2024, 3, 20));
    }

    #[test]
    fn inverted_range_is_preserved_not_corrected() {
        let mut state = State::new(date(2024, 3, 20), 9);
        state.handle(Message::StartEdited("2024-03-15".to_string()));
        state.handle(Message::EndEdited("2024-03-01".to_string()));
        let (start, end) = state.commit();
        assert!(start > end);
    }

    #[test]
    fn window_longer_than_archive_clamps_start() {
        let state = State::new(date(1995, 6, 20), 30);
        assert_eq!(state.start(), ARCHIVE_START);
    }
}
