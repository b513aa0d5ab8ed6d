//! User registration handler.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /users/{id}
pub async fn create_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<worlds_entity::User>>), ApiError> {
    let user = state.user_service.create_user(id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}
