//! Mods: user-submitted game modification packages.
//!
//! The table is named `mod`; the module is `mod_` because `mod` is a Rust keyword.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mod")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_active: bool,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub banner_image: Option<String>,
    pub avatar_image: Option<String>,
    pub user_id: Uuid,
    pub host_id: Uuid,
    pub category_id: Option<Uuid>,
    pub age_restriction_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::host::Entity",
        from = "Column::HostId",
        to = "super::host::Column::Id",
        on_delete = "Cascade"
    )]
    Host,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "SetNull"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::age_restriction::Entity",
        from = "Column::AgeRestrictionId",
        to = "super::age_restriction::Column::Id",
        on_delete = "SetNull"
    )]
    AgeRestriction,
    #[sea_orm(has_many = "super::mod_release::Entity")]
    ModRelease,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::host::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Host.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::age_restriction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AgeRestriction.def()
    }
}

impl Related<super::mod_release::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModRelease.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::mod_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mod_tag::Relation::Mod.def().rev())
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        super::mod_image::Relation::Image.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mod_image::Relation::Mod.def().rev())
    }
}

impl Related<super::ban::Entity> for Entity {
    fn to() -> RelationDef {
        super::mod_ban::Relation::Ban.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mod_ban::Relation::Mod.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
