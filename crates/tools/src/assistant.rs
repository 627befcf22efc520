//! One controller per tool, sharing a single completion client

use std::sync::Arc;

use pr_assistant_config::{ConfigError, Settings};
use pr_assistant_core::{ToolKind, ToolRequest};
use pr_assistant_llm::{CompletionClient, OpenAIBackend, OpenAIConfig};

use crate::controller::{SubmissionOutcome, ToolController};

pub struct Assistant {
    press_release: ToolController,
    pitch: ToolController,
    topic_analysis: ToolController,
    client: Arc<dyn CompletionClient>,
}

impl Assistant {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            press_release: ToolController::new(ToolKind::PressRelease, client.clone()),
            pitch: ToolController::new(ToolKind::Pitch, client.clone()),
            topic_analysis: ToolController::new(ToolKind::TopicAnalysis, client.clone()),
            client,
        }
    }

    /// Build the OpenAI backend from settings.
    ///
    /// The credential is resolved before any HTTP client exists, so a missing
    /// key fails here without touching the network.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let config = OpenAIConfig::from_settings(&settings.llm)?;
        let backend = OpenAIBackend::new(config).map_err(|e| ConfigError::InvalidValue {
            field: "llm".to_string(),
            message: e.to_string(),
        })?;

        tracing::info!(
            model = %settings.llm.model,
            endpoint = %settings.llm.endpoint,
            "Completion backend ready"
        );

        Ok(Self::new(Arc::new(backend)))
    }

    pub fn controller(&self, kind: ToolKind) -> &ToolController {
        match kind {
            ToolKind::PressRelease => &self.press_release,
            ToolKind::Pitch => &self.pitch,
            ToolKind::TopicAnalysis => &self.topic_analysis,
        }
    }

    pub async fn submit(&self, request: &ToolRequest) -> SubmissionOutcome {
        self.controller(request.kind).submit(request).await
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }
}
