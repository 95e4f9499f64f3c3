//! Freezer handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use freezo_entity::freezer::Freezer;
use freezo_service::FreezerSummary;

use crate::dto::request::CreateFreezerRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /api/freezers
pub async fn list_freezers(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Freezer>>>> {
    let freezers = state.freezer_service.list().await?;
    Ok(Json(ApiResponse::ok(freezers)))
}

/// GET /api/freezers/summary
pub async fn freezer_summary(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<FreezerSummary>>>> {
    let summary = state.freezer_service.item_counts().await?;
    Ok(Json(ApiResponse::ok(summary)))
}

/// POST /api/freezers
pub async fn create_freezer(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFreezerRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Freezer>>)> {
    let freezer = state.freezer_service.create(&req.name).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(freezer))))
}

/// DELETE /api/freezers/{id}
pub async fn delete_freezer(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.freezer_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
