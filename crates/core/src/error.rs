//! Error types shared across the workspace

use serde::Serialize;
use thiserror::Error;

/// The three ways a request cycle (or startup) can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Credential missing or invalid at startup. Fatal.
    Configuration,
    /// Required input absent at submission time. Recovered locally.
    MissingField,
    /// Any failure from the completion service. Recovered by the controller.
    Api,
}

/// A required template slot was absent or whitespace-only
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing required field: {slot}")]
pub struct MissingFieldError {
    pub slot: String,
}

impl MissingFieldError {
    pub fn new(slot: impl Into<String>) -> Self {
        Self { slot: slot.into() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    #[error("API error: {0}")]
    Api(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::MissingField(_) => ErrorKind::MissingField,
            Error::Api(_) => ErrorKind::Api,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
