//! Shop API handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use shared::models::{Shop, ShopCategory, ShopCreate, ShopUpdate};

use crate::core::ServerState;
use crate::db::repository::shop::{self, ShopFilter};
use crate::utils::validation::{
    validate_optional_text, validate_required_text, validate_slug, MAX_NAME_LEN,
    MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
};
use crate::utils::{AppError, AppResult};

/// Public list query parameters
#[derive(Debug, Deserialize)]
pub struct ShopListQuery {
    /// Case-insensitive substring match on name
    pub q: Option<String>,
    pub category: Option<ShopCategory>,
    pub floor: Option<i64>,
    #[serde(default)]
    pub featured: bool,
}

/// GET /api/shops - active shops, filtered
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ShopListQuery>,
) -> Json<Vec<Shop>> {
    let filter = ShopFilter {
        q: query.q,
        category: query.category,
        floor: query.floor,
        featured_only: query.featured,
        include_inactive: false,
    };
    Json(shop::list(state.get_db(), &filter).await)
}

/// GET /api/shops/{slug}
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Shop>> {
    shop::find_by_slug(state.get_db(), &slug)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Shop '{slug}' not found")))
}

/// GET /api/admin/shops - every shop, including deactivated
pub async fn admin_list(State(state): State<ServerState>) -> Json<Vec<Shop>> {
    let filter = ShopFilter {
        include_inactive: true,
        ..Default::default()
    };
    Json(shop::list(state.get_db(), &filter).await)
}

/// GET /api/admin/shops/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Shop>> {
    let found = shop::find_by_id(state.get_db(), id).await?;
    found
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Shop {id} not found")))
}

/// POST /api/admin/shops
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ShopCreate>,
) -> AppResult<Json<Shop>> {
    validate_create(&payload)?;
    let created = shop::create(state.get_db(), payload).await?;
    Ok(Json(created))
}

/// PUT /api/admin/shops/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ShopUpdate>,
) -> AppResult<Json<Shop>> {
    validate_update(&payload)?;
    let updated = shop::update(state.get_db(), id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/admin/shops/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = shop::delete(state.get_db(), id).await?;
    if !removed {
        return Err(AppError::not_found(format!("Shop {id} not found")));
    }
    Ok(Json(true))
}

fn validate_create(payload: &ShopCreate) -> Result<(), AppError> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_slug(&payload.slug, "slug")?;
    validate_optional_text(&payload.logo, "logo", MAX_URL_LEN)?;
    validate_optional_text(&payload.banner, "banner", MAX_URL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.website, "website", MAX_URL_LEN)?;
    Ok(())
}

fn validate_update(payload: &ShopUpdate) -> Result<(), AppError> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(slug) = &payload.slug {
        validate_slug(slug, "slug")?;
    }
    validate_optional_text(&payload.logo, "logo", MAX_URL_LEN)?;
    validate_optional_text(&payload.banner, "banner", MAX_URL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.website, "website", MAX_URL_LEN)?;
    Ok(())
}
