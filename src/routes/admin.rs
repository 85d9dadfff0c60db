use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{response::IntoResponse, Json, Router};
use utoipa::OpenApi;

use crate::models::dto::{DashboardMetrics, DashboardResponse};
use crate::AppState;

#[derive(OpenApi)]
#[openapi(paths(dashboard_handler))]
/// Defines the OpenAPI spec for admin endpoints
pub struct AdminApi;

/// Used to group admin endpoints together in the OpenAPI documentation
pub const ADMIN_API_GROUP: &str = "ADMIN";

const DASHBOARD_MESSAGE: &str = "Admin dashboard endpoint";

/// Builds a router for the admin routes
pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(dashboard_handler))
}

// Dashboard handler function
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = ADMIN_API_GROUP,
    responses(
        (status = 200, description = "Aggregate metrics, zeroed until a data layer exists", body = DashboardResponse),
    )
)]
pub async fn dashboard_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(DashboardResponse {
        metrics: DashboardMetrics {
            total_users: 0,
            active_users: 0,
            total_requests: 0,
            uptime: state.uptime_secs(),
        },
        message: DASHBOARD_MESSAGE.to_string(),
    })
}
