use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tower_http::catch_panic::ResponseForPanic;
use tracing::{error, warn};

use crate::models::dto::ErrorMessage;
use crate::models::Error;
use crate::AppState;

/// Fixed body returned once a client exhausts its request budget.
pub const RATE_LIMIT_MESSAGE: &str = "Too many requests from this IP, please try again later.";

/// Rejects requests from clients that exceeded their window budget.
pub async fn rate_limit_guard(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, Error> {
    let client = client_identity(&req);
    if !state.rate_limiter.check(&client) {
        warn!(%client, "rate limit exceeded");
        return Err(Error::new(
            StatusCode::TOO_MANY_REQUESTS,
            RATE_LIMIT_MESSAGE,
        ));
    }
    Ok(next.run(req).await)
}

/// Client key for rate limiting: the first `x-forwarded-for` entry when
/// running behind a proxy, otherwise the peer socket address.
fn client_identity(req: &Request) -> String {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());
    if let Some(addr) = forwarded {
        return addr.to_string();
    }
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Builds the 500 body for requests that panicked below the catch-panic
/// layer. Panic detail is only exposed in development.
#[derive(Clone)]
pub struct PanicResponder {
    expose_detail: bool,
}

impl PanicResponder {
    pub fn new(expose_detail: bool) -> Self {
        Self { expose_detail }
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let detail = if let Some(message) = err.downcast_ref::<String>() {
            message.clone()
        } else if let Some(message) = err.downcast_ref::<&str>() {
            (*message).to_string()
        } else {
            "unknown panic".to_string()
        };
        error!(%detail, "request handler panicked");

        let message = if self.expose_detail {
            detail
        } else {
            "Internal server error".to_string()
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorMessage::new("Something went wrong!").with_message(message)),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http;
    use http_body_util::BodyExt;

    #[test]
    fn forwarded_header_wins_over_peer_address() {
        let mut req = http::Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(Body::empty())
            .unwrap();
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))));
        assert_eq!(client_identity(&req), "203.0.113.7");
    }

    #[test]
    fn falls_back_to_the_peer_address() {
        let mut req = http::Request::builder().body(Body::empty()).unwrap();
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))));
        assert_eq!(client_identity(&req), "127.0.0.1");
    }

    #[test]
    fn unknown_when_no_client_information_exists() {
        let req = http::Request::builder().body(Body::empty()).unwrap();
        assert_eq!(client_identity(&req), "unknown");
    }

    #[tokio::test]
    async fn panic_detail_is_suppressed_in_production() {
        let mut responder = PanicResponder::new(false);
        let response = responder.response_for_panic(Box::new("boom".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Something went wrong!");
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn panic_detail_is_exposed_in_development() {
        let mut responder = PanicResponder::new(true);
        let response = responder.response_for_panic(Box::new("boom".to_string()));
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "boom");
    }
}
