//! Inquiry API handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use shared::models::{Inquiry, InquiryCreate, InquiryKind, InquiryStatus};

use crate::core::ServerState;
use crate::db::repository::inquiry::{self, InquiryFilter};
use crate::utils::validation::{
    validate_email, validate_optional_text, validate_required_text, MAX_NAME_LEN,
    MAX_SHORT_TEXT_LEN,
};
use crate::utils::{AppError, AppResult};

/// POST /api/inquiries - public intake
///
/// The office notification is fired in the background; the visitor's
/// request never waits on the mail provider.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InquiryCreate>,
) -> AppResult<Json<Inquiry>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_email(&payload.email, "email")?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    if !payload.details.is_object() {
        return Err(AppError::validation("details must be a JSON object".to_string()));
    }

    let created = inquiry::create(state.get_db(), payload).await?;

    if let Some(email) = &state.email {
        email.notify_inquiry(created.clone());
    }

    Ok(Json(created))
}

/// Admin list query parameters
#[derive(Debug, Default, Deserialize)]
pub struct InquiryListQuery {
    pub kind: Option<InquiryKind>,
    pub status: Option<InquiryStatus>,
}

/// GET /api/admin/inquiries
pub async fn admin_list(
    State(state): State<ServerState>,
    Query(query): Query<InquiryListQuery>,
) -> AppResult<Json<Vec<Inquiry>>> {
    let filter = InquiryFilter {
        kind: query.kind,
        status: query.status,
    };
    let inquiries = inquiry::find_all(state.get_db(), &filter).await?;
    Ok(Json(inquiries))
}

/// GET /api/admin/inquiries/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Inquiry>> {
    let found = inquiry::find_by_id(state.get_db(), id).await?;
    found
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Inquiry {id} not found")))
}

/// Status transition payload
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: InquiryStatus,
}

/// PUT /api/admin/inquiries/{id}/status
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Inquiry>> {
    let updated = inquiry::set_status(state.get_db(), id, payload.status).await?;
    Ok(Json(updated))
}

/// DELETE /api/admin/inquiries/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = inquiry::delete(state.get_db(), id).await?;
    if !removed {
        return Err(AppError::not_found(format!("Inquiry {id} not found")));
    }
    Ok(Json(true))
}
