//! Self-referential category tree.
//!
//! `depth` and `lineage` are derived columns maintained by the database's
//! `refresh_depth_and_lineage()` trigger whenever a row is inserted or its
//! `parent_id` changes. `lineage` is a JSON array of ancestor ids, root first;
//! `depth` is its length. Application code never writes either column with
//! anything but the defaults.

use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "category_type")]
pub enum CategoryType {
    #[sea_orm(string_value = "mod")]
    Mod,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_active: bool,
    pub parent_id: Option<Uuid>,
    pub r#type: CategoryType,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub depth: i32,
    pub lineage: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_delete = "Cascade"
    )]
    Parent,
    #[sea_orm(has_many = "super::mod_::Entity")]
    Mod,
}

impl Related<super::mod_::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mod.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
