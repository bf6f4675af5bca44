//! Declares that a mod release depends on another mod, constrained by a
//! version expression (e.g. `>=1.2.0, <2.0.0`).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mod_release_dependency")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mod_release_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub mod_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub version_expression: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mod_release::Entity",
        from = "Column::ModReleaseId",
        to = "super::mod_release::Column::Id",
        on_delete = "Cascade"
    )]
    ModRelease,
    #[sea_orm(
        belongs_to = "super::mod_::Entity",
        from = "Column::ModId",
        to = "super::mod_::Column::Id",
        on_delete = "Cascade"
    )]
    Mod,
}

impl Related<super::mod_release::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModRelease.def()
    }
}

impl Related<super::mod_::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mod.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
