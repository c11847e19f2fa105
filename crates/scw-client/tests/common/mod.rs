use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Spawns `router` on an ephemeral port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read listener address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test backend stopped");
    });

    format!("http://{addr}")
}

/// Payload served by the available-representative endpoint.
pub fn representative_body() -> Value {
    json!({ "id": 1, "name": "Alice", "isAvailable": true })
}

/// Payload served by the topics endpoint: one nested branch, one leaf.
pub fn topics_body() -> Value {
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

/// Backend that answers both endpoints successfully.
pub fn ok_backend() -> Router {
    Router::new()
        .route(
            "/customer/available",
            get(|| async { Json(representative_body()) }),
        )
        .route("/topics", get(|| async { Json(topics_body()) }))
}
