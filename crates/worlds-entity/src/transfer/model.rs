//! Transfer-job entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::TransferStatus;

/// One transfer request spanning one or more worlds.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransferJob {
    /// Unique job identifier, generated at creation.
    pub id: Uuid,
    /// Destination environment name, immutable.
    pub target_environment: String,
    /// The user who requested the transfer, immutable.
    pub requester_id: Uuid,
    /// Aggregate status: `completed` iff every world transfer is complete.
    pub status: TransferStatus,
    /// When the job was created.
    pub created_at: DateTime<Utc>,
    /// When the job was last updated.
    pub updated_at: DateTime<Utc>,
}

impl TransferJob {
    /// Create a new job in the `Created` state.
    pub fn new(requester_id: Uuid, target_environment: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            target_environment: target_environment.into(),
            requester_id,
            status: TransferStatus::Created,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The transfer state of one world within one job.
///
/// Identified by `(job_id, world_id)`. `world_version` is the source-side
/// version captured when the job was created and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorldTransfer {
    /// The owning job.
    pub job_id: Uuid,
    /// The world being transferred.
    pub world_id: Uuid,
    /// Source-side world version captured at job creation.
    pub world_version: i32,
    /// Per-world status, advancing independently.
    pub status: TransferStatus,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl WorldTransfer {
    /// Create a per-world record for `job_id` with the captured version.
    pub fn new(job_id: Uuid, world_id: Uuid, world_version: i32, status: TransferStatus) -> Self {
        let now = Utc::now();
        Self {
            job_id,
            world_id,
            world_version,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}
