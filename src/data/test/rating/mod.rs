use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};
use uuid::Uuid;

use crate::data::rating::{RateModParams, RatingRepository};

mod for_mod;
mod rate_mod;

fn params(mod_id: Uuid, user_id: Uuid) -> RateModParams {
    RateModParams {
        mod_id,
        user_id,
        version: "1.2.3".to_string(),
        rating: "4.50".parse().unwrap(),
        content: "Solid, minor install quirks.".to_string(),
    }
}
