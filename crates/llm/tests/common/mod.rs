//! Fake completion provider served on a local port

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::Value;

/// A recorded call to the fake provider
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

struct FakeState {
    status: StatusCode,
    reply: Value,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<CapturedRequest>>,
}

pub struct FakeProvider {
    pub endpoint: String,
    state: Arc<FakeState>,
}

impl FakeProvider {
    /// Serves `/v1/chat/completions`, answering every call with `status` and `reply`
    pub async fn start(status: StatusCode, reply: Value) -> Self {
        Self::serve(status, reply, None).await
    }

    /// Accepts every call but waits `delay` before answering
    pub async fn stalling(delay: Duration) -> Self {
        Self::serve(StatusCode::OK, completion_body("late"), Some(delay)).await
    }

    async fn serve(status: StatusCode, reply: Value, delay: Option<Duration>) -> Self {
        let state = Arc::new(FakeState {
            status,
            reply,
            delay,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/chat/completions", post(handle))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint: format!("http://{}/v1", addr),
            state,
        }
    }

    /// Answers with a single choice carrying `text`
    pub async fn replying(text: &str) -> Self {
        Self::start(StatusCode::OK, completion_body(text)).await
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().clone()
    }
}

pub fn completion_body(text: &str) -> Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 100, "completion_tokens": 20, "total_tokens": 120}
    })
}

async fn handle(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.calls.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().push(CapturedRequest {
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });
    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }
    (state.status, Json(state.reply.clone()))
}

/// An address nothing is listening on
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1", addr)
}
