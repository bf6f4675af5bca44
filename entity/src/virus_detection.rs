//! Scan results keyed by artifact checksum rather than by artifact row, so a
//! verdict applies to every upload of the same bytes.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "virus_detection")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_active: bool,
    pub detected_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Text")]
    pub detector: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub detector_version: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub checksum: String,
    pub is_unsafe: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
