//! Popup API handlers

use axum::extract::{Path, State};
use axum::Json;

use shared::models::{Popup, PopupCreate, PopupUpdate};

use crate::core::ServerState;
use crate::db::repository::popup;
use crate::utils::validation::{
    validate_localized_text, validate_optional_text, validate_required_text, MAX_NAME_LEN,
    MAX_URL_LEN,
};
use crate::utils::{AppError, AppResult};

/// GET /api/popups/active - the popup currently shown to visitors
pub async fn current(State(state): State<ServerState>) -> AppResult<Json<Popup>> {
    popup::find_current(state.get_db())
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found("No active popup".to_string()))
}

/// GET /api/admin/popups
pub async fn admin_list(State(state): State<ServerState>) -> Json<Vec<Popup>> {
    Json(popup::find_all(state.get_db()).await)
}

/// GET /api/admin/popups/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Popup>> {
    let found = popup::find_by_id(state.get_db(), id).await?;
    found
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Popup {id} not found")))
}

/// POST /api/admin/popups
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PopupCreate>,
) -> AppResult<Json<Popup>> {
    validate_localized_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.image, "image", MAX_URL_LEN)?;
    validate_optional_text(&payload.link, "link", MAX_URL_LEN)?;

    let created = popup::create(state.get_db(), payload).await?;
    Ok(Json(created))
}

/// PUT /api/admin/popups/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PopupUpdate>,
) -> AppResult<Json<Popup>> {
    if let Some(title) = &payload.title {
        validate_localized_text(title, "title", MAX_NAME_LEN)?;
    }
    if let Some(image) = &payload.image {
        validate_required_text(image, "image", MAX_URL_LEN)?;
    }
    validate_optional_text(&payload.link, "link", MAX_URL_LEN)?;

    let updated = popup::update(state.get_db(), id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/admin/popups/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = popup::delete(state.get_db(), id).await?;
    if !removed {
        return Err(AppError::not_found(format!("Popup {id} not found")));
    }
    Ok(Json(true))
}
