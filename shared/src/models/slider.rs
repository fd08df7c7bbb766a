//! Slider Model

use serde::{Deserialize, Serialize};

use crate::locale::LocalizedText;

/// Home-page slider entry
///
/// `sort_order` defines the display sequence, ascending. The admin UI
/// reassigns the whole sequence in one batch (see [`SortOrderUpdate`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slider {
    pub id: i64,
    pub title: LocalizedText,
    pub subtitle: LocalizedText,
    pub image: String,
    pub mobile_image: Option<String>,
    pub link: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create slider payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderCreate {
    pub title: LocalizedText,
    pub subtitle: LocalizedText,
    pub image: String,
    pub mobile_image: Option<String>,
    pub link: Option<String>,
    pub sort_order: Option<i64>,
}

/// Update slider payload - absent fields leave stored values untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SliderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// One (id, sort_order) pair of a bulk reorder batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortOrderUpdate {
    pub id: i64,
    pub sort_order: i64,
}
