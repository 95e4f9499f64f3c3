//! Category handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use freezo_entity::category::Category;

use crate::dto::request::CreateCategoryRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = state.inventory_service.categories().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Category>>)> {
    let category = state.inventory_service.create_category(&req.name).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(category))))
}
