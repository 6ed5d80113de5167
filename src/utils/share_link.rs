//! Share link construction for invites.

use crate::error::AppError;
use serde_json::json;
use url::Url;
use uuid::Uuid;

/// Builds the secret link members receive:
/// `<base>?club=<slug>&invite=<code>[&semester=<id>]`.
///
/// Query values are percent-encoded by the `url` crate, so slugs and codes
/// never need escaping by the caller.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `base_url` is not an absolute URL.
pub fn build_share_link(
    base_url: &str,
    club_slug: &str,
    invite_code: &str,
    semester_id: Option<Uuid>,
) -> Result<String, AppError> {
    let mut url = Url::parse(base_url).map_err(|e| {
        AppError::bad_request(
            "Invalid base URL",
            json!({ "base_url": base_url, "reason": e.to_string() }),
        )
    })?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("club", club_slug);
        query.append_pair("invite", invite_code);
        if let Some(id) = semester_id {
            query.append_pair("semester", &id.to_string());
        }
    }

    Ok(url.into())
}
