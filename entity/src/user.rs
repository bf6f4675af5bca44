//! Platform user accounts.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_active: bool,
    /// Set once the user has confirmed their email address.
    pub verified_at: Option<DateTimeWithTimeZone>,
    /// Last successful credential authentication.
    pub authenticated_at: Option<DateTimeWithTimeZone>,
    pub born_on: Option<Date>,
    pub is_anonymous: bool,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC-format password hash, never exposed through the API.
    pub password: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    #[sea_orm(unique)]
    pub display_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub avatar_image: Option<String>,
    pub status_emoji: Option<String>,
    pub status: Option<String>,
    pub preferences: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mod_::Entity")]
    Mod,
    #[sea_orm(has_many = "super::image::Entity")]
    Image,
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::message::Entity")]
    Message,
    #[sea_orm(has_many = "super::ranking::Entity")]
    Ranking,
    #[sea_orm(has_many = "super::rating::Entity")]
    Rating,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::mod_::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mod.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::social::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_social::Relation::Social.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_social::Relation::User.def().rev())
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_notification::Relation::Notification.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_notification::Relation::User.def().rev())
    }
}

impl Related<super::ban::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_ban::Relation::Ban.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_ban::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
