//! Transfer-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to world-transfer jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransferEvent {
    /// A transfer of a world to a target environment was requested.
    Requested {
        /// The world to transfer.
        world_id: Uuid,
        /// The user who requested the transfer.
        requester_id: Uuid,
        /// The source-side world version at request time.
        world_version: i32,
        /// The destination environment name.
        target_environment: String,
    },
}
