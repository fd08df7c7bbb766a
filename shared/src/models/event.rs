//! Event Model

use serde::{Deserialize, Serialize};

use crate::locale::LocalizedText;

/// Event entity
///
/// Upcoming/past is a read-time classification against `ends_at`,
/// never a stored state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub slug: String,
    pub image: Option<String>,
    /// Unix millis
    pub starts_at: i64,
    /// Unix millis
    pub ends_at: i64,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreate {
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub slug: String,
    pub image: Option<String>,
    pub starts_at: i64,
    pub ends_at: i64,
    pub location: Option<String>,
}

/// Update event payload - absent fields leave stored values untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
