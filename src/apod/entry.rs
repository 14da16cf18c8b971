// SPDX-License-Identifier: MPL-2.0
//! Wire format of one archive record.
//!
//! A record is one day's published media. The archive answers a range query
//! with a JSON array, but collapses a one-day range to a bare object, so the
//! response type is untagged over both shapes.

use serde::Deserialize;

/// Media kind of an archive record.
///
/// Anything that is neither `image` nor `video` maps to [`MediaType::Other`]
/// instead of failing the whole batch; such records produce no card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum MediaType {
    Image,
    Video,
    Other,
}

impl From<String> for MediaType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            _ => MediaType::Other,
        }
    }
}

/// One day's archived media record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaEntry {
    pub media_type: MediaType,
    pub title: String,
    /// Publication date as `YYYY-MM-DD`. Unique within a response, so it
    /// doubles as the record's identity when routing async results.
    pub date: String,
    pub url: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl MediaEntry {
    /// Best available image location: `hdurl` when present, else `url`.
    pub fn hd_or_url(&self) -> &str {
        self.hdurl.as_deref().unwrap_or(&self.url)
    }
}

/// Response body of a range query: an array of records, or a single record
/// when the range collapses to one day.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApodResponse {
    Batch(Vec<MediaEntry>),
    Single(MediaEntry),
}

impl ApodResponse {
    /// Normalizes both response shapes to a vector of records.
    pub fn into_entries(self) -> Vec<MediaEntry> {
        match self {
            ApodResponse::Batch(entries) => entries,
            ApodResponse::Single(entry) => vec![entry],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_JSON: &str = r#"{
        "media_type": "image",
        "title": "Galactic Cirrus",
        "date": "2020-01-01",
        "url": "https://example.org/small.jpg",
        "hdurl": "https://example.org/big.jpg",
        "explanation": "Wispy dust clouds."
    }"#;

    #[test]
    fn deserializes_image_entry() {
        let entry: MediaEntry = serde_json::from_str(IMAGE_JSON).expect("parse entry");
        assert_eq!(entry.media_type, MediaType::Image);
        assert_eq!(entry.title, "Galactic Cirrus");
        assert_eq!(entry.date, "2020-01-01");
        assert_eq!(entry.hdurl.as_deref(), Some("https://example.org/big.jpg"));
    }

    #[test]
    fn missing_optional_fields_deserialize_to_none() {
        let json = r#"{
            "media_type": "video",
            "title": "Solar Flare",
            "date": "2020-01-02",
            "url": "https://youtu.be/abc123"
        }"#;
        let entry: MediaEntry = serde_json::from_str(json).expect("parse entry");
        assert_eq!(entry.hdurl, None);
        assert_eq!(entry.explanation, None);
    }

    #[test]
    fn unknown_media_type_maps_to_other() {
        let json = r#"{
            "media_type": "hologram",
            "title": "Future Tech",
            "date": "2020-01-03",
            "url": "https://example.org/holo"
        }"#;
        let entry: MediaEntry = serde_json::from_str(json).expect("parse entry");
        assert_eq!(entry.media_type, MediaType::Other);
    }

    #[test]
    fn single_object_normalizes_to_one_element_batch() {
        let response: ApodResponse = serde_json::from_str(IMAGE_JSON).expect("parse response");
        let entries = response.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Galactic Cirrus");
    }

    #[test]
    fn array_body_normalizes_in_order() {
        let json = format!("[{IMAGE_JSON}, {IMAGE_JSON}]");
        let response: ApodResponse = serde_json::from_str(&json).expect("parse response");
        assert_eq!(response.into_entries().len(), 2);
    }

    #[test]
    fn hd_or_url_prefers_hdurl() {
        let entry: MediaEntry = serde_json::from_str(IMAGE_JSON).expect("parse entry");
        assert_eq!(entry.hd_or_url(), "https://example.org/big.jpg");

        let without_hd = MediaEntry {
            hdurl: None,
            ..entry
        };
        assert_eq!(without_hd.hd_or_url(), "https://example.org/small.jpg");
    }
}
