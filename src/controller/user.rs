use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// GET /users/me - Fetch the current active user's data.
///
/// # Authentication
/// Requires a bearer token carrying the `me` scope.
///
/// # Returns
/// - `200 OK`: UserDto for the authenticated user
/// - `400 Bad Request`: The authenticated user is deactivated
/// - `401 Unauthorized`: Missing/invalid token or missing `me` scope
#[utoipa::path(
    get,
    path = "/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The current user", body = UserDto),
        (status = 400, description = "User is not active", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = ["me"])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require_active(&headers)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST /users/ - Create a new user account.
///
/// Validates the display name and email, enforces identity uniqueness, hashes
/// the password, and stores the account.
///
/// # Returns
/// - `201 Created`: UserDto for the new account
/// - `400 Bad Request`: Invalid display name/email, or identity already in use
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    post,
    path = "/users/",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid or duplicate account data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
