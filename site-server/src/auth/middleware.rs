//! Authentication middleware
//!
//! Gates the admin API. Public content routes never pass through here;
//! the router mounts this only on `/api/admin` and `/api/auth/me`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::AppError;

/// Require an authenticated admin.
///
/// The token is taken from `Authorization: Bearer <token>` or, failing
/// that, from the `session` cookie set at login. On success a
/// [`CurrentUser`] is injected into request extensions.
///
/// | Failure | Status |
/// |---------|--------|
/// | no token | 401 Unauthorized |
/// | expired token | 401 TokenExpired |
/// | bad signature / malformed | 401 InvalidToken |
pub async fn require_admin(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight never carries credentials
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let token = extract_token(&req).ok_or_else(|| {
        tracing::warn!(uri = %req.uri(), "admin request without credentials");
        AppError::unauthorized()
    })?;

    let jwt_service = state.get_jwt_service();
    match jwt_service.validate_token(&token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(uri = %req.uri(), error = %e, "admin authentication failed");
            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::InvalidToken),
            }
        }
    }
}

fn extract_token(req: &Request) -> Option<String> {
    let headers = req.headers();

    if let Some(header) = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    {
        if let Some(token) = JwtService::extract_from_header(header) {
            return Some(token.to_string());
        }
    }

    headers
        .get(http::header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_cookie)
        .map(str::to_string)
}
