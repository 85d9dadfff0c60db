use std::sync::Arc;

use axum::extract::State;
use axum::{response::IntoResponse, Json};
use chrono::Utc;
use utoipa::OpenApi;

use crate::models::dto::ApiStatusResponse;
use crate::AppState;

#[derive(OpenApi)]
#[openapi(paths(api_status_handler))]
/// Defines the OpenAPI spec for the status endpoint
pub struct StatusApi;

/// Used to group status endpoints together in the OpenAPI documentation
pub const STATUS_API_GROUP: &str = "STATUS";

#[utoipa::path(
    get,
    path = "/api/status",
    tag = STATUS_API_GROUP,
    responses(
        (status = OK, description = "API is reachable", body = ApiStatusResponse)
    )
)]
pub async fn api_status_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiStatusResponse {
        message: "API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
