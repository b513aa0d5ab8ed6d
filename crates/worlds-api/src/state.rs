//! Application state shared across all handlers.

use std::sync::Arc;

use worlds_core::config::AppConfig;
use worlds_service::importer::service::ImporterService;
use worlds_service::user::service::UserService;
use worlds_service::world::service::WorldService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// User registration service.
    pub user_service: Arc<UserService>,
    /// World CRUD and membership service.
    pub world_service: Arc<WorldService>,
    /// World-transfer job service.
    pub importer_service: Arc<ImporterService>,
}
