//! Hosts: the platforms/games that mods target.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "host")]
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
    pub host_publisher_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::host_publisher::Entity",
        from = "Column::HostPublisherId",
        to = "super::host_publisher::Column::Id"
    )]
    HostPublisher,
    #[sea_orm(has_many = "super::host_release::Entity")]
    HostRelease,
    #[sea_orm(has_many = "super::mod_::Entity")]
    Mod,
}

impl Related<super::host_publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HostPublisher.def()
    }
}

impl Related<super::host_release::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HostRelease.def()
    }
}

impl Related<super::mod_::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mod.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
