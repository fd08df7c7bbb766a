//! Popup API module

pub mod handler;

use axum::{routing::get, Router};

use crate::core::ServerState;

/// Public routes
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/popups/active", get(handler::current))
}

/// Admin routes (nested under /api/admin)
pub fn admin_router() -> Router<ServerState> {
    Router::new()
        .route("/popups", get(handler::admin_list).post(handler::create))
        .route(
            "/popups/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
