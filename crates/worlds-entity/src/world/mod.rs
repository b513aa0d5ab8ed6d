//! World entity.

pub mod model;

pub use model::World;
