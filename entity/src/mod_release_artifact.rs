use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mod_release_artifact")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_active: bool,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub path: String,
    pub size: i32,
    pub checksum: String,
    pub mod_release_id: Uuid,
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
}

impl Related<super::mod_release::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModRelease.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
