// SPDX-License-Identifier: MPL-2.0
//! Domain types and HTTP client for NASA's Astronomy Picture of the Day
//! archive.

pub mod client;
pub mod entry;
pub mod request;
pub mod video;

pub use entry::{ApodResponse, MediaEntry, MediaType};
pub use video::VideoSource;
