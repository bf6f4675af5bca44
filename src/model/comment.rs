//! Comment domain models and operation parameters.

use uuid::Uuid;

use crate::model::category::parse_lineage;

/// Comment domain model; shares the category tree's hierarchy columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub mod_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub is_active: bool,
    pub depth: i32,
    pub lineage: Vec<Uuid>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            parent_id: entity.parent_id,
            mod_id: entity.mod_id,
            user_id: entity.user_id,
            content: entity.content,
            is_active: entity.is_active,
            depth: entity.depth,
            lineage: parse_lineage(&entity.lineage),
        }
    }
}

/// Parameters for posting a comment, optionally as a reply.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub mod_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: String,
}
