use crate::models::dto::HealthResponse;
use crate::AppState;
use axum::extract::State;
use axum::{response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;
use utoipa::OpenApi;
#[derive(OpenApi)]
#[openapi(paths(
    health_checker_handler
))]
/// Defines the OpenAPI spec for the health endpoint
pub struct HealthApi;
#[utoipa::path(
    get,
    path = "/health",
    tag = "HEALTH",
    responses(
        (status = OK, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_checker_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        uptime: state.uptime_secs(),
        environment: state.config.environment.to_string(),
    })
}
