//! # worlds-entity
//!
//! Domain entity models for the worlds backend: users, worlds, and the
//! transfer-job records tracked by the importer.

pub mod transfer;
pub mod user;
pub mod world;

pub use transfer::{TransferJob, TransferStatus, WorldTransfer};
pub use user::User;
pub use world::World;
