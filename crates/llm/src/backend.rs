//! Completion backend
//!
//! One prompt in, one completion out. The finished prompt is sent as a single
//! user message to an OpenAI-compatible `/chat/completions` endpoint with no
//! sampling parameters, so the provider defaults apply. Failures are returned
//! to the caller as-is; there is no retry.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use pr_assistant_config::{ConfigError, LlmSettings};
use pr_assistant_core::Prompt;

use crate::LlmError;

/// A completion returned by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Generated text, verbatim
    pub text: String,
    /// Model that produced it
    pub model: String,
    pub finish_reason: Option<String>,
    /// Wall time of the request (ms)
    pub total_time_ms: u64,
    pub completion_tokens: Option<usize>,
}

pub type CompletionResult = Result<Completion, LlmError>;

/// Anything that can turn a prompt into text
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one prompt, wait for the full completion
    async fn complete(&self, prompt: &Prompt) -> CompletionResult;

    /// Model identifier used for every call
    fn model_name(&self) -> &str;
}

/// Configuration for OpenAI-compatible backends
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API endpoint (OpenAI: https://api.openai.com/v1)
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    /// Organization ID (OpenAI specific)
    pub organization: Option<String>,
    /// Request timeout. `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl OpenAIConfig {
    /// Config for the public OpenAI API
    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: pr_assistant_config::constants::endpoints::OPENAI_DEFAULT.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            organization: None,
            timeout: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build from loaded settings. Fails if the credential is unusable.
    pub fn from_settings(settings: &LlmSettings) -> Result<Self, ConfigError> {
        let api_key = settings.credential()?;

        Ok(Self {
            endpoint: settings.endpoint.clone(),
            api_key: api_key.to_string(),
            model: settings.model.clone(),
            organization: settings.organization.clone(),
            timeout: settings.timeout_seconds.map(Duration::from_secs),
        })
    }
}

/// OpenAI chat completions backend
pub struct OpenAIBackend {
    config: OpenAIConfig,
    client: Client,
    headers: HeaderMap,
}

impl OpenAIBackend {
    pub fn new(config: OpenAIConfig) -> Result<Self, LlmError> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::Configuration("API key required".to_string()));
        }
        let headers = request_headers(&config)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            client,
            headers,
        })
    }

    /// Full URL for chat completions
    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.config.endpoint.trim_end_matches('/'))
    }

    fn build_headers(&self) -> HeaderMap {
        self.headers.clone()
    }

    fn chat_request(&self, prompt: &Prompt) -> OpenAIChatRequest {
        OpenAIChatRequest {
            model: self.config.model.clone(),
            messages: vec![OpenAIMessage {
                role: "user".to_string(),
                content: Some(prompt.as_str().to_string()),
            }],
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAIBackend {
    async fn complete(&self, prompt: &Prompt) -> CompletionResult {
        let start = Instant::now();

        tracing::debug!(
            model = %self.config.model,
            prompt_chars = prompt.as_str().chars().count(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(self.chat_url())
            .headers(self.build_headers())
            .json(&self.chat_request(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = error_from_status(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), error = %err, "Completion request failed");
            return Err(err);
        }

        let parsed = parse_chat_response(&body)?;
        let total_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            model = %parsed.model.as_deref().unwrap_or(&self.config.model),
            total_time_ms,
            completion_tokens = ?parsed.completion_tokens,
            "Completion received"
        );

        Ok(Completion {
            text: parsed.text,
            model: parsed.model.unwrap_or_else(|| self.config.model.clone()),
            finish_reason: parsed.finish_reason,
            total_time_ms,
            completion_tokens: parsed.completion_tokens,
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

/// Map a non-2xx response to an error, preferring the provider's own message
fn error_from_status(status: u16, body: &str) -> LlmError {
    let message = serde_json::from_str::<OpenAIErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        401 | 403 => LlmError::Authentication { status, message },
        429 => LlmError::RateLimited(message),
        _ => LlmError::Api { status, message },
    }
}

/// The fields of a chat completion body that we use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCompletion {
    pub text: String,
    pub model: Option<String>,
    pub finish_reason: Option<String>,
    pub completion_tokens: Option<usize>,
}

/// Extract the first choice's content from a chat completion body
pub fn parse_chat_response(body: &str) -> Result<ParsedCompletion, LlmError> {
    let response: OpenAIChatResponse =
        serde_json::from_str(body).map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))?;

    let text = choice
        .message
        .content
        .ok_or_else(|| LlmError::InvalidResponse("Choice has no content".to_string()))?;

    Ok(ParsedCompletion {
        text,
        model: response.model,
        finish_reason: choice.finish_reason,
        completion_tokens: response.usage.map(|u| u.completion_tokens),
    })
}

// OpenAI API types
#[derive(Debug, Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    completion_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorResponse {
    error: OpenAIErrorBody,
}

/// Authorization, organization and content-type headers.
///
/// A key or organization that is not a valid header value is rejected here
/// rather than sent without it.
fn request_headers(config: &OpenAIConfig) -> Result<HeaderMap, LlmError> {
    let mut headers = HeaderMap::new();

    let auth_value = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
        .map_err(|_| LlmError::Configuration("API key is not a valid header value".to_string()))?;
    headers.insert(AUTHORIZATION, auth_value);

    if let Some(ref org) = config.organization {
        let org_value = HeaderValue::from_str(org).map_err(|_| {
            LlmError::Configuration("Organization is not a valid header value".to_string())
        })?;
        headers.insert("OpenAI-Organization", org_value);
    }

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorBody {
    message: String,
}
