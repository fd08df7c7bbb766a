//! Shop Model

use serde::{Deserialize, Serialize};

/// Shop category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ShopCategory {
    Fashion,
    Food,
    Electronics,
    Entertainment,
    Beauty,
    Sports,
    Home,
    Services,
}

impl ShopCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShopCategory::Fashion => "fashion",
            ShopCategory::Food => "food",
            ShopCategory::Electronics => "electronics",
            ShopCategory::Entertainment => "entertainment",
            ShopCategory::Beauty => "beauty",
            ShopCategory::Sports => "sports",
            ShopCategory::Home => "home",
            ShopCategory::Services => "services",
        }
    }

    pub fn parse(value: &str) -> Option<ShopCategory> {
        match value {
            "fashion" => Some(ShopCategory::Fashion),
            "food" => Some(ShopCategory::Food),
            "electronics" => Some(ShopCategory::Electronics),
            "entertainment" => Some(ShopCategory::Entertainment),
            "beauty" => Some(ShopCategory::Beauty),
            "sports" => Some(ShopCategory::Sports),
            "home" => Some(ShopCategory::Home),
            "services" => Some(ShopCategory::Services),
            _ => None,
        }
    }
}

/// Shop entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Shop {
    pub id: i64,
    pub name: String,
    /// URL-safe unique identifier used by public pages
    pub slug: String,
    pub category: ShopCategory,
    /// Signed: -1 is the basement floor
    pub floor: i64,
    pub logo: Option<String>,
    pub banner: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub featured: bool,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create shop payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopCreate {
    pub name: String,
    pub slug: String,
    pub category: ShopCategory,
    pub floor: i64,
    pub logo: Option<String>,
    pub banner: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub featured: Option<bool>,
}

/// Update shop payload - absent fields leave stored values untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ShopCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
