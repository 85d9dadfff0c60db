use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{CreatedUser, ErrorMessage, NewUser, UserList},
        Error, User,
    },
    AppState,
};

#[derive(OpenApi)]
#[openapi(paths(list_users_handler, create_user_handler))]
/// Defines the OpenAPI spec for user endpoints
pub struct UsersApi;

/// Used to group user endpoints together in the OpenAPI documentation
pub const USER_API_GROUP: &str = "USER";

const MISSING_FIELDS: &str = "Name and email are required";
const LIST_MESSAGE: &str = "Users endpoint - ready for database integration";
const CREATED_MESSAGE: &str = "User creation endpoint - ready for database integration";

/// Builds a router for all the user routes
pub fn user_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_users_handler).post(create_user_handler))
}

// List users handler function
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_API_GROUP,
    responses(
        (status = 200, description = "User listing, empty until a data layer exists", body = UserList),
    )
)]
pub async fn list_users_handler() -> impl IntoResponse {
    // TODO: query the database once a data layer exists
    Json(UserList {
        users: Vec::new(),
        total: 0,
        message: LIST_MESSAGE.to_string(),
    })
}

// Create user handler function
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_API_GROUP,
    request_body = NewUser,
    responses(
        (status = 201, description = "User successfully created", body = CreatedUser),
        (status = 400, description = "Name or email missing", body = ErrorMessage),
    )
)]
pub async fn create_user_handler(
    Json(body): Json<NewUser>,
) -> Result<impl IntoResponse, Error> {
    let name = body
        .name
        .filter(|name| !name.is_empty())
        .ok_or((StatusCode::BAD_REQUEST, MISSING_FIELDS))?;
    let email = body
        .email
        .filter(|email| !email.is_empty())
        .ok_or((StatusCode::BAD_REQUEST, MISSING_FIELDS))?;

    // TODO: insert into the database once a data layer exists
    let user = User::synthesize(name, email);
    info!(id = user.id, "user record synthesized");

    Ok((
        StatusCode::CREATED,
        Json(CreatedUser::new(user, CREATED_MESSAGE)),
    ))
}
