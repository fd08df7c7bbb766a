//! Event API handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use shared::models::{Event, EventCreate, EventUpdate};
use shared::util::now_millis;

use crate::core::ServerState;
use crate::db::repository::event;
use crate::utils::validation::{
    validate_date_range, validate_localized_text, validate_optional_text, validate_slug,
    MAX_NAME_LEN, MAX_TEXT_LEN, MAX_URL_LEN,
};
use crate::utils::{AppError, AppResult};

/// Which slice of the calendar to return
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventScope {
    #[default]
    Upcoming,
    Past,
    All,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventListQuery {
    #[serde(default)]
    pub scope: EventScope,
}

/// GET /api/events - classified against the current time
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<EventListQuery>,
) -> Json<Vec<Event>> {
    let now = now_millis();
    let events = match query.scope {
        EventScope::Upcoming => event::find_upcoming(state.get_db(), now).await,
        EventScope::Past => event::find_past(state.get_db(), now).await,
        EventScope::All => event::find_all(state.get_db()).await,
    };
    Json(events)
}

/// GET /api/events/{slug}
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Event>> {
    event::find_by_slug(state.get_db(), &slug)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Event '{slug}' not found")))
}

/// GET /api/admin/events - every event, including deactivated
pub async fn admin_list(State(state): State<ServerState>) -> Json<Vec<Event>> {
    Json(event::find_all(state.get_db()).await)
}

/// GET /api/admin/events/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Event>> {
    let found = event::find_by_id(state.get_db(), id).await?;
    found
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))
}

/// POST /api/admin/events
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EventCreate>,
) -> AppResult<Json<Event>> {
    validate_localized_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_localized_text(&payload.description, "description", MAX_TEXT_LEN)?;
    validate_slug(&payload.slug, "slug")?;
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    validate_optional_text(&payload.location, "location", MAX_NAME_LEN)?;
    validate_date_range(payload.starts_at, payload.ends_at)?;

    let created = event::create(state.get_db(), payload).await?;
    Ok(Json(created))
}

/// PUT /api/admin/events/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EventUpdate>,
) -> AppResult<Json<Event>> {
    if let Some(title) = &payload.title {
        validate_localized_text(title, "title", MAX_NAME_LEN)?;
    }
    if let Some(description) = &payload.description {
        validate_localized_text(description, "description", MAX_TEXT_LEN)?;
    }
    if let Some(slug) = &payload.slug {
        validate_slug(slug, "slug")?;
    }
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    validate_optional_text(&payload.location, "location", MAX_NAME_LEN)?;
    if let (Some(starts_at), Some(ends_at)) = (payload.starts_at, payload.ends_at) {
        validate_date_range(starts_at, ends_at)?;
    }

    let updated = event::update(state.get_db(), id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/admin/events/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = event::delete(state.get_db(), id).await?;
    if !removed {
        return Err(AppError::not_found(format!("Event {id} not found")));
    }
    Ok(Json(true))
}
