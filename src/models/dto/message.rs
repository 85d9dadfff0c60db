use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope returned by every failing endpoint. The optional fields
/// carry the 500 detail message and the 404 path echo.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorMessage {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            message: None,
            path: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}
