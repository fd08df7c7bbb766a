//! Inquiry API module

pub mod handler;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::core::ServerState;

/// Public routes
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/inquiries", post(handler::create))
}

/// Admin routes (nested under /api/admin)
pub fn admin_router() -> Router<ServerState> {
    Router::new()
        .route("/inquiries", get(handler::admin_list))
        .route("/inquiries/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/inquiries/{id}/status", put(handler::set_status))
}
