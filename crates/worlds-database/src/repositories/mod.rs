//! Store traits and their PostgreSQL repository implementations.

pub mod transfer;
pub mod user;
pub mod world;

pub use transfer::{TransferJobRepository, TransferStore};
pub use user::{UserRepository, UserStore};
pub use world::{WorldRepository, WorldStore};
