//! External social links shared by users and host publishers.

use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "social_type")]
pub enum SocialType {
    #[sea_orm(string_value = "generic")]
    Generic,
    #[sea_orm(string_value = "twitter")]
    Twitter,
    #[sea_orm(string_value = "patreon")]
    Patreon,
    #[sea_orm(string_value = "github")]
    Github,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "social")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_active: bool,
    pub r#type: SocialType,
    #[sea_orm(column_type = "Text")]
    pub url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_social::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_social::Relation::Social.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
