pub mod admin;
pub mod message;
pub mod status;
pub mod user;
pub use admin::*;
pub use message::ErrorMessage;
pub use status::*;
pub use user::*;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(components(schemas(
    ErrorMessage,
    HealthResponse,
    ApiStatusResponse,
    NewUser,
    UserRecord,
    CreatedUser,
    UserList,
    DashboardMetrics,
    DashboardResponse,
)))]
/// Captures OpenAPI schemas and canned responses defined in the DTO module
pub struct OpenApiSchemas;
