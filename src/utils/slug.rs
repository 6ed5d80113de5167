//! Club slug validation.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Compiled regex for slug validation.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Validates a club slug.
///
/// # Rules
///
/// - Length: 2-40 characters
/// - Allowed characters: lowercase letters, digits, hyphens
/// - Cannot start or end with a hyphen
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug.len() < 2 || slug.len() > 40 {
        return Err(AppError::bad_request(
            "Slug must be 2-40 characters",
            json!({ "provided_length": slug.len() }),
        ));
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(AppError::bad_request(
            "Slug can only contain lowercase letters, digits, and hyphens",
            json!({ "slug": slug }),
        ));
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(AppError::bad_request(
            "Slug cannot start or end with a hyphen",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}
