//! Route definitions for the Freezo HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with every route, the body limit, and request logging.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(freezer_routes())
        .merge(item_routes())
        .merge(category_routes())
        .merge(inventory_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

fn freezer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/freezers",
            get(handlers::freezer::list_freezers).post(handlers::freezer::create_freezer),
        )
        .route("/freezers/summary", get(handlers::freezer::freezer_summary))
        .route("/freezers/{id}", delete(handlers::freezer::delete_freezer))
}

fn item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(handlers::item::list_items).post(handlers::item::create_item),
        )
        .route("/items/batch", post(handlers::item::create_items_batch))
        .route("/items/intake", post(handlers::item::add_items))
        .route("/items/consume", post(handlers::item::consume_items))
        .route("/items/move", post(handlers::item::move_items))
        .route("/items/suggestions", get(handlers::item::suggestions))
        .route(
            "/items/{id}",
            put(handlers::item::update_item).delete(handlers::item::delete_item),
        )
}

fn category_routes() -> Router<AppState> {
    Router::new().route(
        "/categories",
        get(handlers::category::list_categories).post(handlers::category::create_category),
    )
}

fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/inventory", get(handlers::inventory::grouped_inventory))
        .route("/inventory/consume", post(handlers::inventory::consume_from_group))
        .route("/inventory/move", post(handlers::inventory::move_from_group))
}
