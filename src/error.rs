// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Payloads are kept as strings so errors stay `Clone` and can travel inside
//! Iced messages (fetch results are delivered back to `update`).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A page could not be fetched from its source.
    #[error("Fetch Error: page {page}: {reason}")]
    Fetch { page: usize, reason: String },

    #[error("Decode Error: {0}")]
    Decode(String),

    /// The page source could not be resolved into a page sequence.
    #[error("Source Error: {0}")]
    Source(String),

    #[error("HTTP Error: {0}")]
    Http(String),
}

impl Error {
    /// Returns the i18n message key used when surfacing this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Fetch { .. } | Error::Http(_) => "error-page-fetch",
            Error::Decode(_) => "error-page-decode",
            Error::Source(_) => "error-page-source",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn fetch_error_names_the_page() {
        let err = Error::Fetch {
            page: 4,
            reason: "timed out".into(),
        };
        assert_eq!(format!("{}", err), "Fetch Error: page 4: timed out");
        assert_eq!(err.i18n_key(), "error-page-fetch");
    }

    #[test]
    fn config_error_from_bad_toml() {
        let parse = toml::from_str::<toml::Table>("not = [valid");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
