//! Slider API module

pub mod handler;

use axum::{
    routing::{get, put},
    Router,
};

use crate::core::ServerState;

/// Public routes
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/sliders", get(handler::list))
}

/// Admin routes (nested under /api/admin)
pub fn admin_router() -> Router<ServerState> {
    Router::new()
        .route("/sliders", get(handler::admin_list).post(handler::create))
        // Batch sort order update (must be before /{id} to avoid path conflicts)
        .route("/sliders/sort-order", put(handler::reorder))
        .route(
            "/sliders/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
