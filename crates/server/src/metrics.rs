//! Prometheus metrics

use std::time::Duration;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use pr_assistant_core::ToolKind;
use pr_assistant_tools::SubmissionState;

use crate::ServerError;

pub const SUBMISSIONS_TOTAL: &str = "pr_assistant_submissions_total";
pub const COMPLETION_LATENCY_SECONDS: &str = "pr_assistant_completion_latency_seconds";

/// Install the global recorder. Fails if one is already installed.
pub fn init_metrics() -> Result<PrometheusHandle, ServerError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Internal(format!("Failed to install metrics recorder: {}", e)))
}

fn outcome_label(state: SubmissionState) -> &'static str {
    match state {
        SubmissionState::Rendered => "rendered",
        SubmissionState::Rejected => "rejected",
        SubmissionState::Failed => "failed",
        _ => "incomplete",
    }
}

pub fn record_submission(tool: ToolKind, outcome: SubmissionState) {
    metrics::counter!(SUBMISSIONS_TOTAL, "tool" => tool.id(), "outcome" => outcome_label(outcome))
        .increment(1);
}

pub fn record_completion_latency(tool: ToolKind, latency: Duration) {
    metrics::histogram!(COMPLETION_LATENCY_SECONDS, "tool" => tool.id()).record(latency.as_secs_f64());
}
