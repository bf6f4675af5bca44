//! Category tree domain models and operation parameters.

use serde_json::Value;
use uuid::Uuid;

/// Category domain model.
///
/// `depth` and `lineage` are the database-maintained hierarchy columns; on the
/// PostgreSQL runtime schema they always reflect the `parent_id` chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub depth: i32,
    pub lineage: Vec<Uuid>,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            parent_id: entity.parent_id,
            name: entity.name,
            description: entity.description,
            is_active: entity.is_active,
            depth: entity.depth,
            lineage: parse_lineage(&entity.lineage),
        }
    }
}

/// Parses the JSONB lineage array into UUIDs, skipping anything malformed.
pub(crate) fn parse_lineage(lineage: &Value) -> Vec<Uuid> {
    lineage
        .as_array()
        .map(|ids| {
            ids.iter()
                .filter_map(|id| id.as_str())
                .filter_map(|id| Uuid::parse_str(id).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Parameters for creating a category under an optional parent.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
}
