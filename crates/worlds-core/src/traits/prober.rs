//! Remote environment prober trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// Queries a remote target environment for its version of a world.
#[async_trait]
pub trait EnvironmentProber: Send + Sync + std::fmt::Debug {
    /// Return the version of `world_id` at the named target environment.
    async fn remote_version(&self, world_id: Uuid, target_environment: &str) -> AppResult<i32>;
}
