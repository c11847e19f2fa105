use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use scw_client::SupportClient;
use scw_widget::ChatWidget;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Failure switches and request counters shared with the spawned backend.
#[derive(Debug, Default)]
pub struct StubState {
    fail_representative: AtomicBool,
    fail_topics: AtomicBool,
    representative_requests: AtomicUsize,
    topics_requests: AtomicUsize,
}

/// Handle to a stub support backend on an ephemeral port.
#[derive(Debug)]
pub struct StubBackend {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubBackend {
    /// Make the representative endpoint answer 500 from now on.
    pub fn fail_representative(&self, fail: bool) {
        self.state.fail_representative.store(fail, Ordering::SeqCst);
    }

    /// Make the topics endpoint answer 500 from now on.
    pub fn fail_topics(&self, fail: bool) {
        self.state.fail_topics.store(fail, Ordering::SeqCst);
    }

    /// How many requests the representative endpoint has seen.
    pub fn representative_requests(&self) -> usize {
        self.state.representative_requests.load(Ordering::SeqCst)
    }

    /// How many requests the topics endpoint has seen.
    pub fn topics_requests(&self) -> usize {
        self.state.topics_requests.load(Ordering::SeqCst)
    }
}

/// Spawns the stub backend and a widget wired to it.
pub async fn spawn_widget() -> (ChatWidget, StubBackend) {
    let backend = spawn_stub().await;
    let client = SupportClient::new(backend.base_url.clone(), Duration::from_secs(2))
        .expect("Failed to build client");
    (ChatWidget::new(client), backend)
}

/// Spawns the stub backend alone.
pub async fn spawn_stub() -> StubBackend {
    let state = Arc::new(StubState::default());

    let router = Router::new()
        .route("/customer/available", get(representative_handler))
        .route("/topics", get(topics_handler))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read listener address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub backend stopped");
    });

    StubBackend {
        base_url: format!("http://{addr}"),
        state,
    }
}

async fn representative_handler(State(state): State<Arc<StubState>>) -> Response {
    state.representative_requests.fetch_add(1, Ordering::SeqCst);

    if state.fail_representative.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Service error").into_response();
    }

    Json(json!({ "id": 1, "name": "Alice", "isAvailable": true })).into_response()
}

async fn topics_handler(State(state): State<Arc<StubState>>) -> Response {
    state.topics_requests.fetch_add(1, Ordering::SeqCst);

    if state.fail_topics.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Service error").into_response();
    }

    Json(topics_body()).into_response()
}

/// One nested branch, one leaf at the root.
fn topics_body() -> Value {
    json!([
        {
            "name": "Football",
            "suggestions": [
                {
                    "name": "Premier League",
                    "suggestions": [
                        { "name": "Liverpool", "suggestions": [] },
                        { "name": "Man. UTD", "suggestions": [] },
                        { "name": "Man. City", "suggestions": [] }
                    ]
                }
            ]
        },
        { "name": "Books", "suggestions": [] }
    ])
}
