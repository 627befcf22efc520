//! Prompt templates and the completion client
//!
//! Features:
//! - Fixed per-tool templates with single-pass `{slot}` substitution
//! - OpenAI chat completions backend behind the [`CompletionClient`] trait

pub mod backend;
pub mod prompt;
pub mod templates;

pub use backend::{
    parse_chat_response, Completion, CompletionClient, CompletionResult, OpenAIBackend,
    OpenAIConfig, ParsedCompletion,
};
pub use prompt::{build_prompt, build_prompt_for, template_for, Template};

use pr_assistant_core::ErrorKind;
use thiserror::Error;

/// Prefix of every completion failure shown to the user
pub const API_ERROR_PREFIX: &str = "Error al contactar con la API de OpenAI";

/// LLM errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed (HTTP {status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LlmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LlmError::Configuration(_) => ErrorKind::Configuration,
            _ => ErrorKind::Api,
        }
    }

    /// Message for the tool view
    pub fn user_message(&self) -> String {
        format!("{}: {}", API_ERROR_PREFIX, self)
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<LlmError> for pr_assistant_core::Error {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Configuration(message) => pr_assistant_core::Error::Configuration(message),
            other => pr_assistant_core::Error::Api(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(LlmError::Timeout.kind(), ErrorKind::Api);
        assert_eq!(LlmError::RateLimited("quota".into()).kind(), ErrorKind::Api);
        assert_eq!(LlmError::Configuration("no key".into()).kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_user_message_has_prefix() {
        let err = LlmError::Api {
            status: 500,
            message: "server_error".into(),
        };
        let message = err.user_message();
        assert!(message.starts_with("Error al contactar con la API de OpenAI: "));
        assert!(message.contains("server_error"));
    }

    #[test]
    fn test_converts_to_core_error() {
        let err: pr_assistant_core::Error = LlmError::Network("refused".into()).into();
        assert_eq!(err.kind(), ErrorKind::Api);
    }
}
