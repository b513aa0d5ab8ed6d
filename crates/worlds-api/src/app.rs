//! Server bootstrap: wires stores, services, and the router together.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use worlds_core::config::AppConfig;
use worlds_core::error::AppError;
use worlds_core::result::AppResult;
use worlds_core::traits::publisher::EventPublisher;
use worlds_database::repositories::transfer::TransferJobRepository;
use worlds_database::repositories::user::UserRepository;
use worlds_database::repositories::world::WorldRepository;
use worlds_notify::publisher::{LogEventPublisher, RedisEventPublisher};
use worlds_service::importer::prober::HttpEnvironmentProber;
use worlds_service::importer::service::ImporterService;
use worlds_service::user::service::UserService;
use worlds_service::world::service::WorldService;

use crate::router::build_router;
use crate::state::AppState;

/// Construct the application state from configuration and a database pool.
pub async fn build_state(config: AppConfig, pool: PgPool) -> AppResult<AppState> {
    let (membership, redis_client) =
        worlds_cache::provider::membership_store(&config.cache).await?;

    let publisher: Arc<dyn EventPublisher> = match redis_client {
        Some(client) => Arc::new(RedisEventPublisher::new(
            client,
            config.events.channel.clone(),
        )),
        None => Arc::new(LogEventPublisher::new()),
    };

    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let world_repo = Arc::new(WorldRepository::new(pool.clone()));
    let transfer_repo = Arc::new(TransferJobRepository::new(pool.clone()));

    let prober = Arc::new(HttpEnvironmentProber::new(config.importer.clone())?);

    let user_service = Arc::new(UserService::new(user_repo));
    let world_service = Arc::new(WorldService::new(
        world_repo.clone(),
        membership,
        publisher.clone(),
    ));
    let importer_service = Arc::new(ImporterService::new(
        world_repo,
        transfer_repo,
        prober,
        publisher,
    ));

    Ok(AppState {
        config: Arc::new(config),
        user_service,
        world_service,
        importer_service,
    })
}

/// Build the application and serve it until shutdown.
pub async fn run_server(config: AppConfig, pool: PgPool) -> AppResult<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, pool).await?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Worlds server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Worlds server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
