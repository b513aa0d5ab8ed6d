//! World CRUD, join, and current-world handlers.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use worlds_core::error::AppError;
use worlds_entity::World;

use crate::dto::request::{CreateWorldRequest, UpdateWorldRequest};
use crate::dto::response::{ApiResponse, CurrentWorldResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /worlds?owner_id=...
pub async fn list_worlds(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ApiResponse<Vec<World>>>, ApiError> {
    let worlds = match params.get("owner_id") {
        Some(raw) => {
            let owner_id = raw
                .parse::<Uuid>()
                .map_err(|_| AppError::validation("Invalid owner_id"))?;
            state.world_service.list_worlds_by_owner(owner_id).await?
        }
        None => state.world_service.list_worlds().await?,
    };

    Ok(Json(ApiResponse::ok(worlds)))
}

/// GET /worlds/{id}
pub async fn get_world(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<World>>, ApiError> {
    let world = state.world_service.get_world(id).await?;
    Ok(Json(ApiResponse::ok(world)))
}

/// POST /worlds
pub async fn create_world(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateWorldRequest>,
) -> Result<(StatusCode, Json<ApiResponse<World>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let world = state
        .world_service
        .create_world(&auth, req.name, req.description)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(world))))
}

/// PUT /worlds/{id}
pub async fn update_world(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateWorldRequest>,
) -> Result<Json<ApiResponse<World>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let world = state
        .world_service
        .update_world(&auth, id, req.name, req.description)
        .await?;

    Ok(Json(ApiResponse::ok(world)))
}

/// POST /worlds/{id}/join
pub async fn join_world(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.world_service.join_world(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Joined world".to_string(),
    })))
}

/// GET /worlds/my-current
pub async fn my_current_world(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CurrentWorldResponse>>, ApiError> {
    let world_id = state.world_service.current_world(&auth).await?;
    Ok(Json(ApiResponse::ok(CurrentWorldResponse { world_id })))
}
