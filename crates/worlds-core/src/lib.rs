//! # worlds-core
//!
//! Core crate for the worlds backend. Contains the unified error system,
//! configuration schemas, domain events, and the trait seams implemented
//! by the infrastructure crates.
//!
//! This crate has **no** internal dependencies on other worlds crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
