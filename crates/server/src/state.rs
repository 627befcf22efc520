//! Application State
//!
//! Shared state across all handlers. Everything in it is immutable after
//! startup.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use pr_assistant_config::{ConfigError, Settings};
use pr_assistant_tools::Assistant;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub assistant: Arc<Assistant>,
    /// Present when `observability.metrics_enabled` and the recorder installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(settings: Settings, assistant: Assistant) -> Self {
        Self {
            settings: Arc::new(settings),
            assistant: Arc::new(assistant),
            metrics: None,
        }
    }

    /// Resolve the credential and build the OpenAI-backed assistant
    pub fn from_settings(settings: Settings) -> Result<Self, ConfigError> {
        let assistant = Assistant::from_settings(&settings)?;
        Ok(Self::new(settings, assistant))
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
