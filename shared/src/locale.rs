//! Locale handling
//!
//! The site is served in four languages. Turkish is the base locale:
//! every localized field is guaranteed to carry a Turkish value, other
//! languages are optional and fall back to it at display time.
//!
//! Storage keeps one column per locale per field (`title_tr`, `title_en`,
//! ...). [`LocalizedText`] is the nested shape the rest of the system
//! works with; the `from_columns` / `into_columns` pair is the mapping
//! between the two.

use serde::{Deserialize, Serialize};

/// Supported locales, base first.
pub const SUPPORTED_LOCALES: [Locale; 4] = [Locale::Tr, Locale::En, Locale::Ru, Locale::Ar];

/// Locale code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Tr,
    En,
    Ru,
    Ar,
}

impl Locale {
    /// The base locale every localized field must carry.
    pub const BASE: Locale = Locale::Tr;

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::Ar => "ar",
        }
    }

    pub fn parse(code: &str) -> Option<Locale> {
        match code {
            "tr" => Some(Locale::Tr),
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One localized text field.
///
/// The base (Turkish) value is always present. Other locales stay `None`
/// when no translation exists; reads never invent a value. Writes go
/// through [`LocalizedText::into_columns`], which copies the base text
/// into blank locales so storage never holds a null non-base column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub tr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar: Option<String>,
}

impl LocalizedText {
    /// Base-locale-only text.
    pub fn new(tr: impl Into<String>) -> Self {
        Self {
            tr: tr.into(),
            en: None,
            ru: None,
            ar: None,
        }
    }

    /// Map flat storage columns into the nested shape.
    ///
    /// Null and blank non-base columns map to absent - the read side
    /// does not substitute the base text.
    pub fn from_columns(
        tr: String,
        en: Option<String>,
        ru: Option<String>,
        ar: Option<String>,
    ) -> Self {
        Self {
            tr,
            en: normalize(en),
            ru: normalize(ru),
            ar: normalize(ar),
        }
    }

    /// Map back to flat storage columns for a write.
    ///
    /// Missing or blank non-base locales are derived from the base text,
    /// so a freshly written row is fully populated in all four columns.
    pub fn into_columns(self) -> LocalizedColumns {
        let base = self.tr;
        let en = normalize(self.en).unwrap_or_else(|| base.clone());
        let ru = normalize(self.ru).unwrap_or_else(|| base.clone());
        let ar = normalize(self.ar).unwrap_or_else(|| base.clone());
        LocalizedColumns {
            tr: base,
            en,
            ru,
            ar,
        }
    }

    /// Value for a locale, if a translation exists.
    pub fn get(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::Tr => Some(&self.tr),
            Locale::En => self.en.as_deref(),
            Locale::Ru => self.ru.as_deref(),
            Locale::Ar => self.ar.as_deref(),
        }
    }

    /// Value for a locale, falling back to the base locale.
    pub fn resolve(&self, locale: Locale) -> &str {
        self.get(locale).unwrap_or(&self.tr)
    }
}

/// Flat per-locale column values produced by a write mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedColumns {
    pub tr: String,
    pub en: String,
    pub ru: String,
    pub ar: String,
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_columns_keeps_missing_locales_absent() {
        let text = LocalizedText::from_columns(
            "Etkinlikler".into(),
            Some("Events".into()),
            None,
            Some("   ".into()),
        );
        assert_eq!(text.tr, "Etkinlikler");
        assert_eq!(text.en.as_deref(), Some("Events"));
        assert_eq!(text.ru, None);
        // blank column reads as absent, not as empty text
        assert_eq!(text.ar, None);
    }

    #[test]
    fn into_columns_derives_blank_locales_from_base() {
        let cols = LocalizedText {
            tr: "Mağazalar".into(),
            en: Some("Shops".into()),
            ru: None,
            ar: Some("".into()),
        }
        .into_columns();
        assert_eq!(cols.tr, "Mağazalar");
        assert_eq!(cols.en, "Shops");
        assert_eq!(cols.ru, "Mağazalar");
        assert_eq!(cols.ar, "Mağazalar");
    }

    #[test]
    fn resolve_falls_back_to_base() {
        let text = LocalizedText::from_columns("Kampanya".into(), Some("Campaign".into()), None, None);
        assert_eq!(text.resolve(Locale::En), "Campaign");
        assert_eq!(text.resolve(Locale::Ru), "Kampanya");
        assert_eq!(text.resolve(Locale::Ar), "Kampanya");
    }

    #[test]
    fn serde_shape_is_per_locale_keys() {
        let text = LocalizedText::from_columns("Merhaba".into(), Some("Hello".into()), None, None);
        let json = serde_json::to_value(&text).unwrap();
        assert_eq!(json, serde_json::json!({"tr": "Merhaba", "en": "Hello"}));

        let parsed: LocalizedText = serde_json::from_value(serde_json::json!({"tr": "Merhaba"})).unwrap();
        assert_eq!(parsed, LocalizedText::new("Merhaba"));
    }

    #[test]
    fn locale_codes_round_trip() {
        for locale in SUPPORTED_LOCALES {
            assert_eq!(Locale::parse(locale.as_str()), Some(locale));
        }
        assert_eq!(Locale::parse("de"), None);
    }
}
