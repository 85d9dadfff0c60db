use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: String,
    pub uptime: u64,
    pub environment: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiStatusResponse {
    #[schema(example = "API is running")]
    pub message: String,
    pub version: String,
    pub environment: String,
    pub timestamp: String,
}
