use serde::{ser::Serializer, Serialize};
use thiserror::Error;

/// A specialized `Result` type for the Centrifuge API crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for the Centrifuge API crate.
///
/// Non-2xx responses are not errors; they come back as a normal
/// `reqwest::Response` for the caller to inspect.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
