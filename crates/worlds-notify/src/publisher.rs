//! Event publisher implementations.

use redis::AsyncCommands;
use tracing::{debug, error, info};

use worlds_cache::redis::client::RedisClient;
use worlds_core::events::DomainEvent;
use worlds_core::traits::publisher::EventPublisher;

/// Publishes domain events to a Redis pub/sub channel.
///
/// `publish` returns immediately; serialization and the PUBLISH command
/// run on a spawned task. A failed publish is logged and dropped; there
/// is no retry and no acknowledgement.
#[derive(Debug, Clone)]
pub struct RedisEventPublisher {
    client: RedisClient,
    channel: String,
}

impl RedisEventPublisher {
    /// Create a publisher over an existing Redis client.
    pub fn new(client: RedisClient, channel: impl Into<String>) -> Self {
        Self {
            client,
            channel: channel.into(),
        }
    }
}

impl EventPublisher for RedisEventPublisher {
    fn publish(&self, event: DomainEvent) {
        let mut conn = self.client.conn_mut();
        let channel = self.channel.clone();

        tokio::spawn(async move {
            let event_type = event.event_type();
            debug!(channel = %channel, event_type, "Publishing event");

            let payload = match serde_json::to_string(&event) {
                Ok(payload) => payload,
                Err(e) => {
                    error!(event_type, error = %e, "Failed to serialize event");
                    return;
                }
            };

            if let Err(e) = conn.publish::<_, _, ()>(&channel, payload).await {
                error!(channel = %channel, event_type, error = %e, "Failed to publish event");
            }
        });
    }
}

/// Publisher that only logs events.
///
/// Used when no Redis connection is configured (in-memory mode).
#[derive(Debug, Default, Clone)]
pub struct LogEventPublisher;

impl LogEventPublisher {
    /// Create a new logging publisher.
    pub fn new() -> Self {
        Self
    }
}

impl EventPublisher for LogEventPublisher {
    fn publish(&self, event: DomainEvent) {
        info!(
            event_type = event.event_type(),
            actor_id = ?event.actor_id,
            "Domain event"
        );
    }
}
