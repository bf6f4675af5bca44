//! Notifications fanned out to users through `user_notification`.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_active: bool,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub priority: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_notification::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_notification::Relation::Notification.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
