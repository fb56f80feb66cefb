use axum::{routing, Json, Router};
use serde::Serialize;

pub fn router() -> Router<()> {
    Router::new().route("/health", routing::get(health))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    http: bool,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { http: true })
}
