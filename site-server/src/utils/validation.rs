//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so limits live here.

use shared::LocalizedText;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names and localized titles
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions, subtitles, inquiry messages
pub const MAX_TEXT_LEN: usize = 2000;

/// Slugs
pub const MAX_SLUG_LEN: usize = 100;

/// Short identifiers: phone numbers and similar
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        if v.len() > max_len {
            return Err(AppError::validation(format!(
                "{field} is too long ({} chars, max {max_len})",
                v.len()
            )));
        }
    }
    Ok(())
}

/// Validate a localized field: non-empty base text, all variants within limit.
pub fn validate_localized_text(
    value: &LocalizedText,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    validate_required_text(&value.tr, &format!("{field}.tr"), max_len)?;
    validate_optional_text(&value.en, &format!("{field}.en"), max_len)?;
    validate_optional_text(&value.ru, &format!("{field}.ru"), max_len)?;
    validate_optional_text(&value.ar, &format!("{field}.ar"), max_len)?;
    Ok(())
}

/// Validate a URL-safe slug: lowercase ASCII letters, digits and hyphens,
/// no leading/trailing/double hyphen.
pub fn validate_slug(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_SLUG_LEN)?;
    let valid_chars = value
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !valid_chars
        || value.starts_with('-')
        || value.ends_with('-')
        || value.contains("--")
    {
        return Err(AppError::validation(format!(
            "{field} must be a URL-safe slug (lowercase letters, digits, hyphens)"
        )));
    }
    Ok(())
}

/// Minimal email shape check: one `@` with text on both sides and a dot
/// in the domain part. Deliverability is the mail provider's problem.
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.ends_with('.') {
        return Err(AppError::validation(format!("{field} is not a valid email address")));
    }
    Ok(())
}

/// Validate a date range: end must not precede start.
pub fn validate_date_range(starts_at: i64, ends_at: i64) -> Result<(), AppError> {
    if ends_at < starts_at {
        return Err(AppError::validation(
            "ends_at must not be earlier than starts_at".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank_and_oversize() {
        assert!(validate_required_text("Zara", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn slug_rules() {
        assert!(validate_slug("zara", "slug").is_ok());
        assert!(validate_slug("yaz-konserleri-2026", "slug").is_ok());
        assert!(validate_slug("Zara", "slug").is_err());
        assert!(validate_slug("two words", "slug").is_err());
        assert!(validate_slug("-leading", "slug").is_err());
        assert!(validate_slug("trailing-", "slug").is_err());
        assert!(validate_slug("double--hyphen", "slug").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("info@mall.com.tr", "email").is_ok());
        assert!(validate_email("no-at-sign", "email").is_err());
        assert!(validate_email("@mall.com", "email").is_err());
        assert!(validate_email("a@b", "email").is_err());
        assert!(validate_email("a@b.", "email").is_err());
    }

    #[test]
    fn localized_text_requires_base() {
        use shared::LocalizedText;
        let mut text = LocalizedText::new("Başlık");
        assert!(validate_localized_text(&text, "title", MAX_NAME_LEN).is_ok());
        text.tr = String::new();
        assert!(validate_localized_text(&text, "title", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn date_range_ordering() {
        assert!(validate_date_range(100, 200).is_ok());
        assert!(validate_date_range(100, 100).is_ok());
        assert!(validate_date_range(200, 100).is_err());
    }
}
