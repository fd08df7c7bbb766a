//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - login and session introspection
//! - [`shops`] - shop directory
//! - [`events`] - event calendar
//! - [`sliders`] - home-page sliders
//! - [`popups`] - announcement popups
//! - [`inquiries`] - contact/leasing intake and triage
//!
//! Public content routes sit under `/api/...`; everything under
//! `/api/admin/...` (and `/api/auth/me`) requires an admin token.

pub mod auth;
pub mod events;
pub mod health;
pub mod inquiries;
pub mod popups;
pub mod shops;
pub mod sliders;

use axum::http::{HeaderValue, Method};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_admin;
use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    let admin = Router::new()
        .merge(shops::admin_router())
        .merge(events::admin_router())
        .merge(sliders::admin_router())
        .merge(popups::admin_router())
        .merge(inquiries::admin_router());

    let protected = Router::new()
        .nest("/api/admin", admin)
        .merge(auth::protected_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(shops::router())
        .merge(events::router())
        .merge(sliders::router())
        .merge(popups::router())
        .merge(inquiries::router())
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state))
        .with_state(state)
}

/// CORS: exact configured origin, or permissive in development
fn cors_layer(state: &ServerState) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);
    match state
        .config
        .cors_allowed_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}
