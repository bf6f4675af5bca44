use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

use crate::{data::user::UserRepository, model::user::CreateUserParams};

mod create;
mod deactivate;
mod find_by_login_identifier;
mod hashed_password;
mod touch_authenticated_at;

/// Builds create parameters with fixed profile fields and the given identity.
fn params(email: &str, display_name: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        display_name: display_name.to_string(),
        is_anonymous: false,
        born_on: None,
        given_name: Some("Ada".to_string()),
        family_name: Some("Lovelace".to_string()),
        bio: None,
        preferences: json!({}),
    }
}
