// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Application-level errors surfaced by the archive client and config layer.
///
/// Variants carry the underlying cause as a string so they stay `Clone` and
/// can travel through Iced messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, connection reset, timeout).
    Http(String),
    /// The archive answered with a non-success HTTP status.
    Status(u16),
    /// The response body could not be decoded as the expected JSON shape.
    Decode(String),
    /// Configuration file could not be read or written.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP error: {}", e),
            Error::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            Error::Decode(e) => write!(f, "Decode error: {}", e),
            Error::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
