// SPDX-License-Identifier: MPL-2.0
//! `apod_gallery` is a desktop gallery for NASA's Astronomy Picture of the
//! Day archive, built with the Iced GUI framework.
//!
//! The user picks a date range, fetches the archive records for it, and
//! browses the results as cards; activating a card opens a detail overlay
//! with the full-resolution media and explanation text.

pub mod apod;
pub mod app;
pub mod config;
pub mod daterange;
pub mod error;
pub mod ui;
