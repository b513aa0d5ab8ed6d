//! Core traits defined in `worlds-core` and implemented by other crates.

pub mod membership;
pub mod prober;
pub mod publisher;

pub use membership::MembershipStore;
pub use prober::EnvironmentProber;
pub use publisher::EventPublisher;
