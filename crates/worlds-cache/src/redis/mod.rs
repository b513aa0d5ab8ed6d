//! Redis-backed implementations.

pub mod client;
pub mod membership;

pub use client::RedisClient;
pub use membership::RedisMembershipStore;
