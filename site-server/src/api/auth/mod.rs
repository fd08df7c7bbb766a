//! Auth API module

pub mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

/// Public auth routes
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/auth/login", post(handler::login))
}

/// Routes behind the admin middleware
pub fn protected_router() -> Router<ServerState> {
    Router::new().route("/api/auth/me", get(handler::me))
}
