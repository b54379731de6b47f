use axum::{extract::State, response::Json};
use tracing::{debug, instrument};

use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stored = state.store.current().await;
    debug!("Health check, store seeded: {}", stored.is_some());

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: if stored.is_some() { "seeded" } else { "empty" }.to_string(),
        plan_id: stored.as_ref().map(|s| s.id.clone()),
        seeded_at: stored.map(|s| s.created_at),
    };

    Json(response)
}
