//! Membership store trait: which world is a user currently in.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// Tracks the world each user is currently in.
///
/// Implemented by the Redis-backed store for production and by an
/// in-memory map for development and tests.
#[async_trait]
pub trait MembershipStore: Send + Sync + std::fmt::Debug {
    /// Record that a user joined a world.
    ///
    /// Returns a conflict error if the user is already in that world.
    async fn join_world(&self, user_id: Uuid, world_id: Uuid) -> AppResult<()>;

    /// Return the world the user is currently in, if any.
    async fn current_world(&self, user_id: Uuid) -> AppResult<Option<Uuid>>;
}
