//! Slider API handlers

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use shared::models::{Slider, SliderCreate, SliderUpdate, SortOrderUpdate};

use crate::core::ServerState;
use crate::db::repository::slider;
use crate::utils::validation::{
    validate_localized_text, validate_optional_text, validate_required_text, MAX_NAME_LEN,
    MAX_TEXT_LEN, MAX_URL_LEN,
};
use crate::utils::{AppError, AppResult};

/// GET /api/sliders - active sliders in display order
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Slider>> {
    Json(slider::find_active(state.get_db()).await)
}

/// GET /api/admin/sliders - every slider in display order
pub async fn admin_list(State(state): State<ServerState>) -> Json<Vec<Slider>> {
    Json(slider::find_all(state.get_db()).await)
}

/// GET /api/admin/sliders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Slider>> {
    let found = slider::find_by_id(state.get_db(), id).await?;
    found
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Slider {id} not found")))
}

/// POST /api/admin/sliders
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SliderCreate>,
) -> AppResult<Json<Slider>> {
    validate_localized_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_localized_text(&payload.subtitle, "subtitle", MAX_TEXT_LEN)?;
    validate_required_text(&payload.image, "image", MAX_URL_LEN)?;
    validate_optional_text(&payload.mobile_image, "mobile_image", MAX_URL_LEN)?;
    validate_optional_text(&payload.link, "link", MAX_URL_LEN)?;

    let created = slider::create(state.get_db(), payload).await?;
    Ok(Json(created))
}

/// PUT /api/admin/sliders/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SliderUpdate>,
) -> AppResult<Json<Slider>> {
    if let Some(title) = &payload.title {
        validate_localized_text(title, "title", MAX_NAME_LEN)?;
    }
    if let Some(subtitle) = &payload.subtitle {
        validate_localized_text(subtitle, "subtitle", MAX_TEXT_LEN)?;
    }
    if let Some(image) = &payload.image {
        validate_required_text(image, "image", MAX_URL_LEN)?;
    }
    validate_optional_text(&payload.mobile_image, "mobile_image", MAX_URL_LEN)?;
    validate_optional_text(&payload.link, "link", MAX_URL_LEN)?;

    let updated = slider::update(state.get_db(), id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/admin/sliders/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = slider::delete(state.get_db(), id).await?;
    if !removed {
        return Err(AppError::not_found(format!("Slider {id} not found")));
    }
    Ok(Json(true))
}

/// Response for the batch reorder operation
#[derive(Debug, Serialize)]
pub struct ReorderResponse {
    pub updated: usize,
}

/// PUT /api/admin/sliders/sort-order - all-or-nothing reorder batch
pub async fn reorder(
    State(state): State<ServerState>,
    Json(updates): Json<Vec<SortOrderUpdate>>,
) -> AppResult<Json<ReorderResponse>> {
    if updates.is_empty() {
        return Err(AppError::validation("Reorder batch must not be empty".to_string()));
    }

    tracing::info!(count = updates.len(), "Slider reorder batch received");
    let updated = slider::reorder(state.get_db(), &updates).await?;
    Ok(Json(ReorderResponse { updated }))
}
