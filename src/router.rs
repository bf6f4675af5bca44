use axum::{
    routing::{get, post},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{auth, user},
    model::{
        api::ErrorDto,
        security::{TokenDto, TokenRequestDto},
        user::{CreateUserDto, UserDto, UserPreferences},
    },
    state::AppState,
};

/// Registers the bearer scheme referenced by the protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(auth::access_token, user::get_me, user::create_user),
    components(schemas(
        TokenRequestDto,
        TokenDto,
        CreateUserDto,
        UserDto,
        UserPreferences,
        ErrorDto
    )),
    tags(
        (name = "security", description = "OAuth2 token issuance"),
        (name = "users", description = "User account management")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/oauth2/token", post(auth::access_token))
        .route("/users/", post(user::create_user))
        .route("/users/me", get(user::get_me))
}

/// Swagger UI serving the generated OpenAPI document.
pub fn swagger() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
