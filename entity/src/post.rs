use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_active: bool,
    /// Null while the post is still a draft.
    pub published_at: Option<DateTimeWithTimeZone>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub user_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::mod_::Entity> for Entity {
    fn to() -> RelationDef {
        super::mod_post::Relation::Mod.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mod_post::Relation::Post.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
