// SPDX-License-Identifier: MPL-2.0
//! Classification of video references into embeddable and non-embeddable
//! sources.
//!
//! The archive publishes video records as arbitrary URLs. YouTube links (both
//! `watch?v=` and `youtu.be` short-link forms) normalize to the embed path
//! convention; anything else stays an external link because arbitrary video
//! files cannot be assumed embeddable.

/// A classified video reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// A recognized host, normalized to its embed URL.
    Embed(String),
    /// An unrecognized host; only usable as an external link.
    Link(String),
}

impl VideoSource {
    /// Classifies a raw video URL.
    ///
    /// Only URLs whose host is actually YouTube are normalized; a `watch?v=`
    /// or `youtu.be/` substring elsewhere in a URL (path, query) must not
    /// fabricate an embed pointing at an unrelated video.
    pub fn classify(url: &str) -> Self {
        if is_youtube_host(url) {
            if let Some(rest) = url.split_once("youtu.be/").map(|(_, rest)| rest) {
                return VideoSource::Embed(embed_url(rest));
            }
            if let Some(rest) = url.split_once("watch?v=").map(|(_, rest)| rest) {
                return VideoSource::Embed(embed_url(rest));
            }
            // Already-normalized embed links pass through unchanged.
            if url.contains("youtube.com/embed/") {
                return VideoSource::Embed(url.to_string());
            }
        }
        VideoSource::Link(url.to_string())
    }

    /// The URL to hand to the system browser, whichever variant this is.
    pub fn url(&self) -> &str {
        match self {
            VideoSource::Embed(url) | VideoSource::Link(url) => url,
        }
    }
}

/// Whether the URL's host component is one of the YouTube domains.
fn is_youtube_host(url: &str) -> bool {
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host = after_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(after_scheme);
    let host = host.split(':').next().unwrap_or(host);
    matches!(
        host,
        "youtube.com" | "www.youtube.com" | "m.youtube.com" | "youtu.be" | "www.youtu.be"
    )
}

/// Builds the embed URL from the trailing video identifier, dropping any
/// query or fragment suffix.
fn embed_url(trailing: &str) -> String {
    let id = trailing
        .split(['?', '&', '#'])
        .next()
        .unwrap_or(trailing);
    format!("https://www.youtube.com/embed/{id}")
}
