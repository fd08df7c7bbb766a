//! Authentication handlers

use std::time::Duration;

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};
use axum::{Extension, Json};

use shared::auth::{AdminInfo, LoginRequest, LoginResponse};

use crate::auth::jwt::SESSION_COOKIE;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::admin_user;
use crate::AppError;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login
///
/// Verifies credentials and returns a JWT, also set as the `session`
/// cookie for browser clients.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = admin_user::find_by_username(state.get_db(), &req.username)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent username enumeration
    let user = match user {
        Some(u) => {
            if !u.is_active {
                return Err(AppError::forbidden("Account has been disabled".to_string()));
            }
            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
            if !password_valid {
                tracing::warn!(username = %req.username, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }
            u
        }
        None => {
            tracing::warn!(username = %req.username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    let max_age = jwt_service.config.expiration_minutes * 60;
    let secure = if state.config.is_production() {
        "; Secure"
    } else {
        ""
    };
    let cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}{secure}"
    );

    tracing::info!(username = %user.username, "Admin logged in");

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(LoginResponse {
            token,
            user: AdminInfo {
                id: user.id,
                username: user.username,
                display_name: user.display_name,
            },
        }),
    ))
}

/// GET /api/auth/me - identity behind the current token
pub async fn me(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<AdminInfo>, AppError> {
    let user = admin_user::find_by_id(state.get_db(), current.id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Admin {} not found", current.id)))?;

    Ok(Json(AdminInfo {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
    }))
}
