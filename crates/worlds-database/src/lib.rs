//! # worlds-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the worlds backend. The store traits consumed by
//! the service layer are defined here next to their implementations.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::create_pool;
