//! World entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A world: the transferable resource.
///
/// `version` increases monotonically; every metadata update bumps it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct World {
    /// Unique world identifier.
    pub id: Uuid,
    /// The owning user.
    pub owner_id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Monotonically increasing version, starting at 1.
    pub version: i32,
    /// When the world was created.
    pub created_at: DateTime<Utc>,
    /// When the world was last updated.
    pub updated_at: DateTime<Utc>,
}

impl World {
    /// Create a new world owned by `owner_id`, at version 1.
    pub fn new(owner_id: Uuid, name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.into(),
            description: description.into(),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the given user owns this world.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_starts_at_version_one() {
        let owner = Uuid::new_v4();
        let world = World::new(owner, "azeroth", "a place");
        assert_eq!(world.version, 1);
        assert!(world.is_owned_by(owner));
        assert!(!world.is_owned_by(Uuid::new_v4()));
    }
}
