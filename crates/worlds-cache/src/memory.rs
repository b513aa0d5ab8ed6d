//! In-memory membership store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use worlds_core::error::AppError;
use worlds_core::result::AppResult;
use worlds_core::traits::membership::MembershipStore;

/// Membership store backed by a process-local map.
///
/// Used in development and tests; state does not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryMembershipStore {
    current: DashMap<Uuid, Uuid>,
}

impl MemoryMembershipStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MembershipStore for MemoryMembershipStore {
    async fn join_world(&self, user_id: Uuid, world_id: Uuid) -> AppResult<()> {
        if self.current.get(&user_id).map(|w| *w) == Some(world_id) {
            return Err(AppError::conflict("User is already in this world"));
        }
        self.current.insert(user_id, world_id);
        Ok(())
    }

    async fn current_world(&self, user_id: Uuid) -> AppResult<Option<Uuid>> {
        Ok(self.current.get(&user_id).map(|w| *w))
    }
}
