//! World CRUD and membership.

pub mod service;

pub use service::WorldService;
