//! Fire-and-forget domain event publisher trait.

use crate::events::DomainEvent;

/// Publishes domain events without blocking the caller.
///
/// Submission is synchronous; delivery happens on an independent task.
/// Failures are logged by the implementation and never surface to the
/// operation that emitted the event.
pub trait EventPublisher: Send + Sync + std::fmt::Debug {
    /// Submit an event for best-effort delivery.
    fn publish(&self, event: DomainEvent);
}
