//! Popup Model

use serde::{Deserialize, Serialize};

use crate::locale::LocalizedText;

/// How often a visitor should see the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum PopupFrequency {
    /// Shown once per visitor (client tracks the seen state)
    Once,
    /// Shown on every visit
    Always,
}

/// Announcement popup
///
/// Several popups may be active in storage; the one shown to visitors is
/// the most recently updated active row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Popup {
    pub id: i64,
    pub title: LocalizedText,
    pub image: String,
    pub link: Option<String>,
    pub frequency: PopupFrequency,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create popup payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupCreate {
    pub title: LocalizedText,
    pub image: String,
    pub link: Option<String>,
    pub frequency: Option<PopupFrequency>,
}

/// Update popup payload - absent fields leave stored values untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<PopupFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
