// SPDX-License-Identifier: MPL-2.0
//! Async HTTP access to the archive and to media files.
//!
//! One shared `reqwest::Client` is built at startup and cloned into each
//! request task (cloning is cheap; the client is internally reference
//! counted).

use crate::apod::entry::{ApodResponse, MediaEntry};
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("ApodGallery/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client with an explicit redirect policy and user
/// agent. Falls back to the default client if the builder fails.
pub fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Failed to build HTTP client, using defaults: {e}");
            reqwest::Client::new()
        })
}

/// Fetches and decodes one range query.
///
/// The body is read as text first so a decode failure can report the cause
/// separately from transport errors.
pub async fn fetch_entries(client: reqwest::Client, url: String) -> Result<Vec<MediaEntry>> {
    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }

    let body = response.text().await?;
    let parsed: ApodResponse = serde_json::from_str(&body)?;
    Ok(parsed.into_entries())
}

/// Fetches a media file (thumbnail or full-resolution image) as raw bytes.
pub async fn fetch_bytes(client: reqwest::Client, url: String) -> Result<Vec<u8>> {
    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }

    Ok(response.bytes().await?.to_vec())
}
