//! Configuration management for the PR assistant
//!
//! Supports loading configuration from:
//! - YAML/TOML files under `config/`
//! - Environment variables (PR_ASSISTANT_ prefix, `__` separator)
//!
//! The completion service credential is the only required value. It is
//! resolved once at startup and never mutated afterwards.

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, load_settings_from, LlmSettings, ObservabilityConfig, RuntimeEnvironment,
    ServerConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Completion service API key is not configured")]
    MissingCredential,

    #[error("Completion service API key is invalid: {0}")]
    InvalidCredential(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    /// Credential problems are fatal to startup
    pub fn is_credential_error(&self) -> bool {
        matches!(self, ConfigError::MissingCredential | ConfigError::InvalidCredential(_))
    }

    /// Steps the operator should follow to fix the error, when there are any
    pub fn remediation(&self) -> Option<&'static str> {
        if self.is_credential_error() {
            Some(constants::messages::CREDENTIAL_REMEDIATION)
        } else {
            None
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<ConfigError> for pr_assistant_core::Error {
    fn from(err: ConfigError) -> Self {
        pr_assistant_core::Error::Configuration(err.to_string())
    }
}
