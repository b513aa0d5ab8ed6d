//! Membership provider selection.

use std::sync::Arc;

use tracing::info;

use worlds_core::config::cache::CacheConfig;
use worlds_core::error::AppError;
use worlds_core::result::AppResult;
use worlds_core::traits::membership::MembershipStore;

use crate::memory::MemoryMembershipStore;
use crate::redis::client::RedisClient;
use crate::redis::membership::RedisMembershipStore;

/// Build the membership store named by configuration.
///
/// Returns the store together with the Redis client when one was opened,
/// so other components (the event publisher) can reuse the connection.
pub async fn membership_store(
    config: &CacheConfig,
) -> AppResult<(Arc<dyn MembershipStore>, Option<RedisClient>)> {
    match config.provider.as_str() {
        "redis" => {
            info!("Initializing Redis membership store");
            let client = RedisClient::connect(&config.redis).await?;
            let store: Arc<dyn MembershipStore> =
                Arc::new(RedisMembershipStore::new(client.clone()));
            Ok((store, Some(client)))
        }
        "memory" => {
            info!("Initializing in-memory membership store");
            let store: Arc<dyn MembershipStore> = Arc::new(MemoryMembershipStore::new());
            Ok((store, None))
        }
        other => Err(AppError::configuration(format!(
            "Unknown cache provider: '{other}'. Supported: memory, redis"
        ))),
    }
}
