pub mod routes;

use axum::{Json, extract::State};
use posts_core::domain::health::port::HealthService;
use serde_json::json;

use crate::http::server::{ApiError, AppState};

/// 200 when the database answers a ping, 503 otherwise.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.service.check_health().await?;
    Ok(Json(json!({ "status": "ok" })))
}
