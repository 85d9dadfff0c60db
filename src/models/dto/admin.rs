use serde::Serialize;
use utoipa::ToSchema;

/// Aggregate counters for the admin dashboard. All zeroed until a data
/// layer exists; only uptime is live.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_users: u64,
    pub active_users: u64,
    pub total_requests: u64,
    pub uptime: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub metrics: DashboardMetrics,
    pub message: String,
}
