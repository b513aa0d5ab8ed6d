//! World-transfer job handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use worlds_core::error::AppError;
use worlds_service::importer::service::TransferJobStatus;

use crate::dto::request::ImportWorldsRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /worlds/import
pub async fn import_worlds(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ImportWorldsRequest>,
) -> Result<Json<ApiResponse<TransferJobStatus>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let view = state
        .importer_service
        .create_transfer_job(&auth, &req.worlds, &req.target_environment)
        .await?;

    Ok(Json(ApiResponse::ok(view)))
}

/// GET /jobs/status/{id}
pub async fn job_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TransferJobStatus>>, ApiError> {
    let view = state.importer_service.job_status(id).await?;
    Ok(Json(ApiResponse::ok(view)))
}
