mod admin;
mod health;
mod middlewares;
mod status;
mod swagger;
mod user;
use health::health_checker_handler;
use middlewares::{rate_limit_guard, PanicResponder};
use status::api_status_handler;

use crate::models::dto::ErrorMessage;
use crate::{AppState, Config};

use axum::extract::DefaultBodyLimit;
use axum::http::header::{
    HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
};
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Json, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected before reaching a handler.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn make_app(config: Config) -> anyhow::Result<Router> {
    let cors = build_cors(&config)?;
    let panic_responder = PanicResponder::new(config.environment.is_development());
    let state = Arc::new(AppState::new(config));

    let api = Router::new()
        .route("/status", get(api_status_handler))
        .nest("/users", user::user_routes())
        .nest("/admin", admin::admin_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_guard,
        ));

    let ret = Router::new()
        .route("/health", get(health_checker_handler))
        .nest("/api", api)
        .merge(swagger::build_documentation())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(CatchPanicLayer::custom(panic_responder))
        .layer(TraceLayer::new_for_http());

    Ok(ret)
}

/// An exact configured origin gets the credentialed CORS policy; the `*`
/// default cannot carry credentials and falls back to the permissive layer.
fn build_cors(config: &Config) -> anyhow::Result<CorsLayer> {
    if config.cors_origin == "*" {
        return Ok(CorsLayer::permissive());
    }
    let origin = HeaderValue::from_str(&config.cors_origin)?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_credentials(true)
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]))
}

/// Catch-all for unmatched routes, echoing the requested path back.
async fn fallback_handler(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorMessage::new("Route not found").with_path(uri.path())),
    )
}
