use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

use crate::{
    error::{auth::AuthError, AppError},
    model::{
        api::ErrorDto,
        security::{TokenDto, TokenRequestDto},
    },
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping security endpoints in OpenAPI documentation
pub static SECURITY_TAG: &str = "security";

/// POST /oauth2/token - Build an access token for form credentials.
///
/// Authenticates the form's username (email or display name) and password and
/// issues a bearer token carrying the requested scopes. Deactivated accounts
/// do not authenticate.
///
/// # Returns
/// - `200 OK`: TokenDto with the signed access token
/// - `401 Unauthorized`: Incorrect login credentials
/// - `500 Internal Server Error`: Database or signing error
#[utoipa::path(
    post,
    path = "/oauth2/token",
    tag = SECURITY_TAG,
    request_body(
        content = TokenRequestDto,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Access token issued", body = TokenDto),
        (status = 401, description = "Incorrect login credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn access_token(
    State(state): State<AppState>,
    Form(form): Form<TokenRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .authenticate(&form.username, &form.password)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let scopes: Vec<String> = form
        .scope
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let access_token = state.tokens.issue(&user, &scopes)?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            access_token,
            token_type: "bearer".to_string(),
        }),
    ))
}
