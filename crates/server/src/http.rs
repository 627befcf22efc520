//! HTTP Endpoints
//!
//! REST API for the three tools.

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use pr_assistant_core::{FormValues, ToolKind, ToolRequest};
use pr_assistant_tools::{SubmissionOutcome, SubmissionResult, UploadedFile};

use crate::metrics::{record_completion_latency, record_submission};
use crate::state::AppState;
use crate::ServerError;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.settings.server.cors_origins,
        state.settings.server.cors_enabled,
    );

    Router::new()
        .route("/api/tools", get(list_tools))
        .route("/api/tools/:kind", post(submit_tool))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If no configured origin parses, defaults to localhost:3000
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    let allowed = if parsed_origins.is_empty() {
        tracing::info!("No usable CORS origins configured, defaulting to {}", DEFAULT_CORS_ORIGIN);
        vec![HeaderValue::from_static(DEFAULT_CORS_ORIGIN)]
    } else {
        tracing::info!("CORS configured with {} origins", parsed_origins.len());
        parsed_origins
    };

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Tool catalog for building the forms
async fn list_tools(State(state): State<AppState>) -> Json<serde_json::Value> {
    let tools: Vec<_> = ToolKind::ALL
        .iter()
        .map(|kind| {
            serde_json::json!({
                "id": kind.id(),
                "title": kind.display_name(),
                "description": kind.description(),
                "required_slot": kind.required_slot(),
                "accepts_upload": kind.accepts_upload(),
                "options": kind.option_slots(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "tools": tools,
        "model": state.assistant.model_name(),
    }))
}

/// Body of a tool submission
#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequest {
    /// Slot name to value; free-text and option slots alike
    #[serde(default)]
    pub fields: FormValues,
    #[serde(default)]
    pub upload: Option<UploadedFile>,
}

impl SubmitRequest {
    fn into_tool_request(self, kind: ToolKind) -> Result<ToolRequest, ServerError> {
        let mut request = ToolRequest::new(kind);
        for (slot, value) in self.fields.iter() {
            request.set_field(slot, value);
        }
        if let Some(upload) = self.upload {
            upload.apply_to(&mut request)?;
        }
        Ok(request)
    }
}

/// Run one submission
///
/// POST /api/tools/:kind
async fn submit_tool(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    body: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmissionOutcome>), ServerError> {
    let Json(body) = body.map_err(|e| ServerError::InvalidRequest(e.body_text()))?;
    let kind = kind
        .parse::<ToolKind>()
        .map_err(|e| ServerError::UnknownTool(e.0))?;
    let request = body.into_tool_request(kind)?;

    let outcome = state.assistant.submit(&request).await;
    record_submission(kind, outcome.state());

    let status = match &outcome.result {
        SubmissionResult::Rendered { latency_ms, .. } => {
            record_completion_latency(kind, Duration::from_millis(*latency_ms));
            StatusCode::OK
        }
        SubmissionResult::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionResult::Failed { .. } => StatusCode::BAD_GATEWAY,
    };

    Ok((status, Json(outcome)))
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.settings.environment,
        "model": state.assistant.model_name(),
        "tools": ToolKind::ALL.len(),
    }))
}

/// Prometheus exposition
async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, ServerError> {
    let handle = state.metrics.as_ref().ok_or(ServerError::MetricsDisabled)?;
    Ok((
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pr_assistant_config::Settings;
    use pr_assistant_core::Prompt;
    use pr_assistant_llm::{CompletionClient, CompletionResult, LlmError};
    use pr_assistant_tools::Assistant;
    use std::sync::Arc;

    struct Unreachable;

    #[async_trait]
    impl CompletionClient for Unreachable {
        async fn complete(&self, _prompt: &Prompt) -> CompletionResult {
            Err(LlmError::Network("unreachable".to_string()))
        }

        fn model_name(&self) -> &str {
            "gpt-4o"
        }
    }

    #[test]
    fn test_router_creation() {
        let state = AppState::new(Settings::default(), Assistant::new(Arc::new(Unreachable)));
        let _ = create_router(state);
    }

    #[test]
    fn test_cors_layer_variants() {
        let _ = build_cors_layer(&[], false);
        let _ = build_cors_layer(&[], true);
        let _ = build_cors_layer(&["https://prensa.example.com".to_string(), "bad\norigin".to_string()], true);
    }

    #[test]
    fn test_submit_request_routes_fields() {
        let body: SubmitRequest = serde_json::from_value(serde_json::json!({
            "fields": {"topic": "DeFi", "tone": "Formal y respetuoso"}
        }))
        .unwrap();
        let request = body.into_tool_request(ToolKind::Pitch).unwrap();

        assert_eq!(request.required_text(), Some("DeFi"));
        assert_eq!(request.selected_options.get("tone"), Some("Formal y respetuoso"));
    }
}
