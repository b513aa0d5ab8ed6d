//! World-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to world lifecycle operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorldEvent {
    /// A world was created.
    Created {
        /// The world ID.
        world_id: Uuid,
        /// The owning user.
        owner_id: Uuid,
        /// The world name.
        name: String,
        /// The initial version.
        version: i32,
    },
    /// A world's metadata was updated.
    Updated {
        /// The world ID.
        world_id: Uuid,
        /// The owning user.
        owner_id: Uuid,
        /// The world name after the update.
        name: String,
        /// The version after the update.
        version: i32,
    },
}
