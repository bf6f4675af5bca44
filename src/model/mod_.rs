//! Mod domain models and operation parameters.

use uuid::Uuid;

/// Mod domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Mod {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub user_id: Uuid,
    pub host_id: Uuid,
    pub category_id: Option<Uuid>,
    pub age_restriction_id: Option<Uuid>,
}

impl Mod {
    pub fn from_entity(entity: entity::mod_::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
            description: entity.description,
            is_active: entity.is_active,
            user_id: entity.user_id,
            host_id: entity.host_id,
            category_id: entity.category_id,
            age_restriction_id: entity.age_restriction_id,
        }
    }
}

/// Parameters for creating a mod, optionally tagged at creation time.
///
/// Tag rows are written in the same transaction as the mod itself.
#[derive(Debug, Clone)]
pub struct CreateModParams {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub user_id: Uuid,
    pub host_id: Uuid,
    pub category_id: Option<Uuid>,
    pub tags: Vec<Uuid>,
}

/// Parameters for updating a mod's editable fields. `None` leaves a field
/// unchanged.
#[derive(Debug, Clone)]
pub struct UpdateModParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<Option<Uuid>>,
}
