//! Domain events emitted by worlds-backend operations.
//!
//! Events are handed to the configured [`EventPublisher`] and delivered
//! best-effort to interested consumers (other environments, audit tooling).
//! Nothing in the request path ever waits on delivery.
//!
//! [`EventPublisher`]: crate::traits::EventPublisher

pub mod transfer;
pub mod world;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use transfer::TransferEvent;
pub use world::WorldEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event (if applicable).
    pub actor_id: Option<Uuid>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A world-related event.
    World(WorldEvent),
    /// A transfer-related event.
    Transfer(TransferEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor_id: Option<Uuid>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }

    /// Short event type name for logging.
    pub fn event_type(&self) -> &'static str {
        match &self.payload {
            EventPayload::World(WorldEvent::Created { .. }) => "world.created",
            EventPayload::World(WorldEvent::Updated { .. }) => "world.updated",
            EventPayload::Transfer(TransferEvent::Requested { .. }) => "transfer.requested",
        }
    }
}
