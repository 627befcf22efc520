//! Tool controller
//!
//! Drives one submission through [`SubmissionState`]: validate the free-text
//! input, build the prompt, make exactly one completion call, and report the
//! result. A controller holds no state between submissions.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use pr_assistant_core::{ErrorKind, ToolKind, ToolRequest};
use pr_assistant_llm::{build_prompt, CompletionClient};

use crate::state::{SubmissionState, Trail};

/// What a finished submission shows in the tool view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionResult {
    /// Completion text, verbatim
    Rendered {
        text: String,
        model: String,
        latency_ms: u64,
    },
    /// Input rejected before any call
    Rejected { warning: String, field: String },
    /// The completion call failed
    Failed { kind: ErrorKind, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionOutcome {
    pub tool: ToolKind,
    #[serde(flatten)]
    pub result: SubmissionResult,
    #[serde(skip)]
    pub trail: Trail,
}

impl SubmissionOutcome {
    pub fn state(&self) -> SubmissionState {
        match self.result {
            SubmissionResult::Rendered { .. } => SubmissionState::Rendered,
            SubmissionResult::Rejected { .. } => SubmissionState::Rejected,
            SubmissionResult::Failed { .. } => SubmissionState::Failed,
        }
    }

    /// Rendered text, if the submission succeeded
    pub fn text(&self) -> Option<&str> {
        match &self.result {
            SubmissionResult::Rendered { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Controller for one tool kind
#[derive(Clone)]
pub struct ToolController {
    kind: ToolKind,
    client: Arc<dyn CompletionClient>,
}

impl ToolController {
    pub fn new(kind: ToolKind, client: Arc<dyn CompletionClient>) -> Self {
        Self { kind, client }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    /// Run one submission to a terminal state and back to `Idle`
    pub async fn submit(&self, request: &ToolRequest) -> SubmissionOutcome {
        let mut trail = Trail::new();
        let result = self.run(request, &mut trail).await;
        trail.advance(SubmissionState::Idle);

        tracing::debug!(
            tool = %self.kind,
            trail = ?trail.states(),
            "Submission finished"
        );

        SubmissionOutcome {
            tool: self.kind,
            result,
            trail,
        }
    }

    async fn run(&self, request: &ToolRequest, trail: &mut Trail) -> SubmissionResult {
        trail.advance(SubmissionState::Validating);
        if request.required_text().is_none() {
            trail.advance(SubmissionState::Rejected);
            tracing::info!(tool = %self.kind, "Submission rejected: empty input");
            return SubmissionResult::Rejected {
                warning: self.kind.missing_input_warning().to_string(),
                field: self.kind.required_slot().to_string(),
            };
        }

        trail.advance(SubmissionState::Building);
        let prompt = match build_prompt(self.kind, &request.values()) {
            Ok(prompt) => prompt,
            Err(err) => {
                trail.advance(SubmissionState::Rejected);
                tracing::info!(tool = %self.kind, field = %err.slot, "Submission rejected: missing field");
                return SubmissionResult::Rejected {
                    warning: self.missing_option_warning(&err.slot),
                    field: err.slot,
                };
            }
        };

        trail.advance(SubmissionState::Calling);
        tracing::info!(tool = %self.kind, "{}", self.kind.progress_message());
        let start = Instant::now();

        match self.client.complete(&prompt).await {
            Ok(completion) => {
                trail.advance(SubmissionState::Rendered);
                SubmissionResult::Rendered {
                    text: completion.text,
                    model: completion.model,
                    latency_ms: start.elapsed().as_millis() as u64,
                }
            }
            Err(err) => {
                trail.advance(SubmissionState::Failed);
                tracing::warn!(tool = %self.kind, error = %err, "Completion failed");
                SubmissionResult::Failed {
                    kind: err.kind(),
                    error: err.user_message(),
                }
            }
        }
    }

    fn missing_option_warning(&self, slot: &str) -> String {
        let label = self
            .kind
            .option_slots()
            .iter()
            .find(|option| option.name == slot)
            .map(|option| option.label.trim_end_matches(':'))
            .unwrap_or(slot);
        format!("Por favor, completa el campo «{}».", label)
    }
}
