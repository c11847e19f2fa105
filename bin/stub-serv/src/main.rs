use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use scw_client::Representative;
use scw_nav::Topic;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = router().layer(CorsLayer::very_permissive());

    // Start the server
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    println!("Stub support backend running on http://localhost:3000");
    axum::serve(listener, app).await?;

    Ok(())
}

fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/customer/available", get(available_representative))
        .route("/topics", get(topics))
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn available_representative() -> Json<Representative> {
    Json(Representative {
        id: 1,
        name: "Alice".to_owned(),
        is_available: true,
    })
}

async fn topics() -> Json<Vec<Topic>> {
    Json(sample_tree())
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

/// The canned tree served to every session.
fn sample_tree() -> Vec<Topic> {
    vec![
        Topic::branch(
            "Football",
            vec![
                Topic::branch(
                    "Premier League",
                    vec![
                        Topic::leaf("Liverpool"),
                        Topic::leaf("Man. UTD"),
                        Topic::leaf("Man. City"),
                    ],
                ),
                Topic::branch(
                    "Serie A",
                    vec![
                        Topic::leaf("Milan"),
                        Topic::leaf("Inter"),
                        Topic::leaf("Juventus"),
                    ],
                ),
            ],
        ),
        Topic::branch(
            "Books",
            vec![
                Topic::branch(
                    "Investment",
                    vec![
                        Topic::leaf("The Intelligent Investor - Benjamin Graham"),
                        Topic::leaf("Rich Dad, Poor Dad - Robert Kiyosaki"),
                    ],
                ),
                Topic::branch(
                    "Children",
                    vec![
                        Topic::leaf("Momo - Michael Ende"),
                        Topic::leaf("BFG - Roald Dahl"),
                    ],
                ),
            ],
        ),
    ]
}
