//! Versioned releases of a mod, built against a specific host release.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mod_release")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_active: bool,
    #[sea_orm(column_type = "Text")]
    pub version: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub size: i32,
    pub checksum: String,
    pub mod_id: Uuid,
    pub host_release_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mod_::Entity",
        from = "Column::ModId",
        to = "super::mod_::Column::Id",
        on_delete = "Cascade"
    )]
    Mod,
    #[sea_orm(
        belongs_to = "super::host_release::Entity",
        from = "Column::HostReleaseId",
        to = "super::host_release::Column::Id",
        on_delete = "Cascade"
    )]
    HostRelease,
    #[sea_orm(has_many = "super::mod_release_artifact::Entity")]
    Artifact,
}

impl Related<super::mod_::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mod.def()
    }
}

impl Related<super::host_release::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HostRelease.def()
    }
}

impl Related<super::mod_release_artifact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artifact.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
