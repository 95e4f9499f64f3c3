//! Item record handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use freezo_entity::item::{Item, ItemUpdate, NewItem};
use freezo_service::AddItemsForm;

use crate::dto::request::{ConsumeItemsRequest, MoveItemsRequest, SuggestionQuery};
use crate::dto::response::{ApiResponse, MutationResponse};
use crate::error::ApiResult;
use crate::extractors::{JsonBody, ValidatedJson};
use crate::state::AppState;

/// GET /api/items
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Item>>>> {
    let items = state.inventory_service.list_items().await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/items
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(item): JsonBody<NewItem>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Item>>)> {
    let mut created = state
        .inventory_service
        .create_items(std::slice::from_ref(&item))
        .await?;
    let item = created.pop().ok_or_else(|| {
        freezo_core::AppError::internal("Store returned no record for a single insert")
    })?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// POST /api/items/batch
pub async fn create_items_batch(
    State(state): State<AppState>,
    JsonBody(items): JsonBody<Vec<NewItem>>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Vec<Item>>>)> {
    let created = state.inventory_service.create_items(&items).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

/// POST /api/items/intake
pub async fn add_items(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<AddItemsForm>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Vec<Item>>>)> {
    let created = state.inventory_service.add_items(&form).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

/// PUT /api/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(update): JsonBody<ItemUpdate>,
) -> ApiResult<Json<ApiResponse<Item>>> {
    let item = state.inventory_service.update_item(id, &update).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/items/{id}
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.inventory_service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/items/consume
pub async fn consume_items(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ConsumeItemsRequest>,
) -> ApiResult<Json<ApiResponse<MutationResponse>>> {
    let count = state.inventory_service.consume_ids(&req.delete_ids).await?;
    Ok(Json(ApiResponse::ok(MutationResponse {
        message: "batch consumed".to_string(),
        count,
    })))
}

/// POST /api/items/move
pub async fn move_items(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<MoveItemsRequest>,
) -> ApiResult<Json<ApiResponse<MutationResponse>>> {
    let count = state
        .inventory_service
        .move_ids(&req.item_ids, req.new_freezer_id)
        .await?;
    Ok(Json(ApiResponse::ok(MutationResponse {
        message: "items moved".to_string(),
        count,
    })))
}

/// GET /api/items/suggestions?q=...
pub async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> ApiResult<Json<ApiResponse<Vec<String>>>> {
    let names = state.inventory_service.suggestions(&query.q).await?;
    Ok(Json(ApiResponse::ok(names)))
}
