//! Assistant wired to the real OpenAI backend, against a local fake provider

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::Value;

use pr_assistant_config::{ConfigError, Settings};
use pr_assistant_core::{ToolKind, ToolRequest};
use pr_assistant_tools::{Assistant, SubmissionResult, SubmissionState};

#[derive(Default)]
struct Provider {
    hits: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

async fn chat(State(provider): State<Arc<Provider>>, Json(body): Json<Value>) -> Json<Value> {
    provider.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(content) = body["messages"][0]["content"].as_str() {
        *provider.last_prompt.lock() = Some(content.to_string());
    }
    Json(serde_json::json!({
        "model": "gpt-4o",
        "choices": [{"message": {"role": "assistant", "content": "¡Hola! 👋 ¿Te interesa?"}, "finish_reason": "stop"}]
    }))
}

async fn start_provider() -> (Arc<Provider>, String) {
    let provider = Arc::new(Provider::default());
    let app = Router::new()
        .route("/v1/chat/completions", post(chat))
        .with_state(provider.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (provider, format!("http://{}/v1", addr))
}

fn settings(endpoint: &str, api_key: Option<&str>) -> Settings {
    let mut settings = Settings::default();
    settings.llm.endpoint = endpoint.to_string();
    settings.llm.api_key = api_key.map(str::to_string);
    settings
}

#[tokio::test]
async fn test_missing_credential_makes_no_network_call() {
    let (provider, endpoint) = start_provider().await;

    let err = Assistant::from_settings(&settings(&endpoint, None)).err().unwrap();

    assert_eq!(err, ConfigError::MissingCredential);
    assert_eq!(provider.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_whatsapp_pitch_end_to_end() {
    let (provider, endpoint) = start_provider().await;
    let assistant = Assistant::from_settings(&settings(&endpoint, Some("sk-test"))).unwrap();

    let request = ToolRequest::new(ToolKind::Pitch)
        .with_text("topic", "Nueva app de fitness con IA")
        .with_option("output_format", "Mensaje de WhatsApp")
        .with_option("tone", "Amigable e informal")
        .with_option("target_media", "Influencer o creador de contenido");

    let outcome = assistant.submit(&request).await;

    assert_eq!(outcome.text(), Some("¡Hola! 👋 ¿Te interesa?"));
    assert_eq!(outcome.trail.current(), SubmissionState::Idle);
    assert_eq!(provider.hits.load(Ordering::SeqCst), 1);

    let prompt = provider.last_prompt.lock().clone().unwrap();
    assert!(prompt.contains("WhatsApp"));
    assert!(!prompt.contains("Asunto"));
    assert!(prompt.contains("Nueva app de fitness con IA"));
}

#[tokio::test]
async fn test_rejected_submission_never_reaches_provider() {
    let (provider, endpoint) = start_provider().await;
    let assistant = Assistant::from_settings(&settings(&endpoint, Some("sk-test"))).unwrap();

    let outcome = assistant
        .submit(&ToolRequest::new(ToolKind::TopicAnalysis).with_text("topic", "   "))
        .await;

    assert!(matches!(outcome.result, SubmissionResult::Rejected { .. }));
    assert_eq!(provider.hits.load(Ordering::SeqCst), 0);
}
