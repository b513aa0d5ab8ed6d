//! # worlds-notify
//!
//! Fire-and-forget publication of domain events. Delivery runs on a
//! spawned task; the request path never waits on it and failures are
//! only ever logged.

pub mod publisher;

pub use publisher::{LogEventPublisher, RedisEventPublisher};
