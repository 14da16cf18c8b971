// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::apod::MediaEntry;
use crate::daterange;
use crate::error::Error;
use crate::ui::gallery;
use crate::ui::modal;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    DateRange(daterange::Message),
    Gallery(gallery::Message),
    Modal(modal::Message),
    /// The "Get images" control was activated.
    GetImagesPressed,
    /// Result of a range query, tagged with its request generation.
    EntriesLoaded {
        generation: u64,
        result: Result<Vec<MediaEntry>, Error>,
    },
    /// Result of one card thumbnail fetch.
    ThumbnailLoaded {
        generation: u64,
        date: String,
        result: Result<Vec<u8>, Error>,
    },
    /// Result of the overlay's full-resolution image fetch.
    ModalMediaLoaded {
        date: String,
        result: Result<Vec<u8>, Error>,
    },
    /// Escape was pressed while no widget captured it.
    EscapePressed,
    /// Periodic tick driving the loading animation.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// NASA API key override. Takes precedence over the config file.
    pub api_key: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
