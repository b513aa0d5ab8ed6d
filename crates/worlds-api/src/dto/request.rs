//! Request DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body for creating a world.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorldRequest {
    /// World name.
    #[validate(length(min = 3, max = 255))]
    pub name: String,
    /// World description.
    #[validate(length(min = 3, max = 1000))]
    pub description: String,
}

/// Body for updating a world.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateWorldRequest {
    /// New world name.
    #[validate(length(min = 3, max = 255))]
    pub name: String,
    /// New world description.
    #[validate(length(min = 3, max = 1000))]
    pub description: String,
}

/// Body for requesting a world-transfer job.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ImportWorldsRequest {
    /// Worlds to transfer.
    #[validate(length(min = 1))]
    pub worlds: Vec<Uuid>,
    /// Destination environment name.
    #[validate(length(min = 1))]
    pub target_environment: String,
}
