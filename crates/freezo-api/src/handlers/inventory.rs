//! Grouped inventory view and plan-driven mutations.

use axum::Json;
use axum::extract::{Query, State};

use freezo_core::AppError;
use freezo_entity::inventory::{DateKey, ItemGroup};

use crate::dto::request::{InventoryQuery, PlanConsumeRequest, PlanMoveRequest};
use crate::dto::response::{ApiResponse, MutationResponse};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /api/inventory?freezer_id=...
pub async fn grouped_inventory(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> ApiResult<Json<ApiResponse<Vec<ItemGroup>>>> {
    let groups = state.inventory_service.grouped(query.freezer_id).await?;
    Ok(Json(ApiResponse::ok(groups)))
}

/// POST /api/inventory/consume
pub async fn consume_from_group(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PlanConsumeRequest>,
) -> ApiResult<Json<ApiResponse<MutationResponse>>> {
    let date = date_key(req.date.as_deref())?;
    let mut plan = state
        .inventory_service
        .open_consume(&req.name, &date, req.freezer_id)
        .await?;
    plan.selection_mut()
        .choose(req.selection.bucket(), req.selection.quantity)?;

    let count = state.inventory_service.consume(&plan).await?;
    Ok(Json(ApiResponse::ok(MutationResponse {
        message: "batch consumed".to_string(),
        count,
    })))
}

/// POST /api/inventory/move
pub async fn move_from_group(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PlanMoveRequest>,
) -> ApiResult<Json<ApiResponse<MutationResponse>>> {
    let service = &state.inventory_service;
    let mut plan = if req.all {
        if req.selection.names_bucket() {
            return Err(AppError::validation("Moving all items does not take a weight").into());
        }
        service.open_move_all(&req.name).await?
    } else {
        let freezer_id = req
            .freezer_id
            .ok_or_else(|| AppError::validation("Select a source freezer"))?;
        let date = date_key(req.date.as_deref())?;
        service.open_move(&req.name, &date, freezer_id).await?
    };

    if let Some(destination) = req.destination {
        plan.set_destination(destination)?;
    }
    if let Some(selection) = plan.selection_mut() {
        selection.choose(req.selection.bucket(), req.selection.quantity)?;
    }

    let count = service.relocate(&plan).await?;
    Ok(Json(ApiResponse::ok(MutationResponse {
        message: "items moved".to_string(),
        count,
    })))
}

fn date_key(raw: Option<&str>) -> Result<DateKey, AppError> {
    match raw {
        Some(raw) => raw.parse(),
        None => Ok(DateKey::no_date()),
    }
}
