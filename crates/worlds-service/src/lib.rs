//! # worlds-service
//!
//! Business logic service layer for the worlds backend. Each service
//! orchestrates stores, the membership cache, the remote environment
//! prober, and the event publisher to implement application-level
//! use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod importer;
pub mod user;
pub mod world;

pub use context::RequestContext;
pub use importer::{HttpEnvironmentProber, ImporterService, TransferJobStatus};
pub use user::UserService;
pub use world::WorldService;
