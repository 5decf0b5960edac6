// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only the host-side plumbing (image decoding, configuration) can fail; the
//! sizing and drag core in [`crate::domain`] is infallible.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Image Error: {0}")]
    Image(String),

    #[error("SVG Error: {0}")]
    Svg(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
