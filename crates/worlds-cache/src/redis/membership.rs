//! Redis-backed membership store.

use async_trait::async_trait;
use redis::{AsyncCommands, Script};
use uuid::Uuid;

use worlds_core::error::{AppError, ErrorKind};
use worlds_core::result::AppResult;
use worlds_core::traits::membership::MembershipStore;

use crate::keys;
use crate::redis::client::RedisClient;

/// Check-and-set join: refuses to re-join the world the user is already in,
/// otherwise records the new membership. Runs server-side so concurrent
/// joins for the same user cannot interleave.
const JOIN_WORLD_SCRIPT: &str = r#"
local current = redis.call('GET', KEYS[1])
if current == ARGV[1] then
    return 0
end
redis.call('SET', KEYS[1], ARGV[1])
return 1
"#;

/// Membership store backed by Redis.
#[derive(Debug, Clone)]
pub struct RedisMembershipStore {
    client: RedisClient,
}

impl RedisMembershipStore {
    /// Create a new store over an existing Redis client.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MembershipStore for RedisMembershipStore {
    async fn join_world(&self, user_id: Uuid, world_id: Uuid) -> AppResult<()> {
        let key = self.client.prefixed_key(&keys::user_current_world(user_id));
        let mut conn = self.client.conn_mut();

        let joined: i32 = Script::new(JOIN_WORLD_SCRIPT)
            .key(key)
            .arg(world_id.to_string())
            .invoke_async(&mut conn)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Cache,
                    format!("Failed to join world {world_id} for user {user_id}"),
                    e,
                )
            })?;

        if joined == 0 {
            return Err(AppError::conflict("User is already in this world"));
        }
        Ok(())
    }

    async fn current_world(&self, user_id: Uuid) -> AppResult<Option<Uuid>> {
        let key = self.client.prefixed_key(&keys::user_current_world(user_id));
        let mut conn = self.client.conn_mut();

        let value: Option<String> = conn.get(key).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Cache,
                format!("Failed to read current world for user {user_id}"),
                e,
            )
        })?;

        match value {
            Some(raw) => Uuid::parse_str(&raw)
                .map(Some)
                .map_err(|e| AppError::with_source(ErrorKind::Cache, "Corrupt world id", e)),
            None => Ok(None),
        }
    }
}
