//! # worlds-cache
//!
//! Membership tracking (which world each user is currently in) backed by
//! Redis in production and an in-memory map elsewhere, plus the shared
//! Redis client used by the event publisher.

pub mod keys;
pub mod memory;
pub mod provider;
pub mod redis;

pub use memory::MemoryMembershipStore;
pub use self::redis::client::RedisClient;
pub use self::redis::membership::RedisMembershipStore;
