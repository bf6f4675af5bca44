use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "host_publisher_social")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub host_publisher_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub social_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::host_publisher::Entity",
        from = "Column::HostPublisherId",
        to = "super::host_publisher::Column::Id",
        on_delete = "Cascade"
    )]
    HostPublisher,
    #[sea_orm(
        belongs_to = "super::social::Entity",
        from = "Column::SocialId",
        to = "super::social::Column::Id"
    )]
    Social,
}

impl Related<super::host_publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HostPublisher.def()
    }
}

impl Related<super::social::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Social.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
