//! Inquiry Model

use serde::{Deserialize, Serialize};

/// What kind of form the inquiry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum InquiryKind {
    Contact,
    Leasing,
}

impl InquiryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryKind::Contact => "contact",
            InquiryKind::Leasing => "leasing",
        }
    }
}

/// Admin triage state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum InquiryStatus {
    Pending,
    Read,
}

/// Visitor inquiry (contact or leasing form submission)
///
/// Append-only apart from status transitions and deletion. `details`
/// is a free-form JSON object whose shape varies by kind (leasing forms
/// carry company/sector fields, contact forms a message body).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: i64,
    pub kind: InquiryKind,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub details: serde_json::Value,
    pub status: InquiryStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Inquiry intake payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryCreate {
    pub kind: InquiryKind,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default = "default_details")]
    pub details: serde_json::Value,
}

fn default_details() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
