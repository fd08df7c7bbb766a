//! Shop API module

pub mod handler;

use axum::{routing::get, Router};

use crate::core::ServerState;

/// Public routes
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/shops", get(handler::list))
        .route("/api/shops/{slug}", get(handler::get_by_slug))
}

/// Admin routes (nested under /api/admin)
pub fn admin_router() -> Router<ServerState> {
    Router::new()
        .route("/shops", get(handler::admin_list).post(handler::create))
        .route(
            "/shops/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
