//! Organizations behind the hosts (platforms/games) mods target.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "host_publisher")]
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
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::host::Entity")]
    Host,
}

impl Related<super::host::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Host.def()
    }
}

impl Related<super::social::Entity> for Entity {
    fn to() -> RelationDef {
        super::host_publisher_social::Relation::Social.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::host_publisher_social::Relation::HostPublisher
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
