//! Route definitions for the worlds HTTP API.
//!
//! Routes are registered explicitly at startup; no runtime introspection.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .merge(health_routes())
        .merge(user_routes())
        .merge(world_routes())
        .merge(importer_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/healthcheck", get(handlers::health::health_check))
}

/// User registration
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/{id}", post(handlers::user::create_user))
}

/// World CRUD, join, and current-world
fn world_routes() -> Router<AppState> {
    Router::new()
        .route("/worlds", get(handlers::world::list_worlds))
        .route("/worlds", post(handlers::world::create_world))
        .route("/worlds/my-current", get(handlers::world::my_current_world))
        .route("/worlds/{id}", get(handlers::world::get_world))
        .route("/worlds/{id}", put(handlers::world::update_world))
        .route("/worlds/{id}/join", post(handlers::world::join_world))
}

/// Transfer job creation and status polling
fn importer_routes() -> Router<AppState> {
    Router::new()
        .route("/worlds/import", post(handlers::importer::import_worlds))
        .route("/jobs/status/{id}", get(handlers::importer::job_status))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
