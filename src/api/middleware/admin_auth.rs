//! Bearer passcode middleware for admin endpoints.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use sha2::{Digest, Sha256};

use crate::{error::AppError, state::AppState};

/// Guards admin routes with the configured passcode.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <passcode>
/// ```
///
/// The presented passcode is compared as a SHA-256 digest against the
/// digest computed at startup, so the comparison works on fixed-size
/// values rather than the secret itself.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the Authorization header is missing,
/// malformed, or carries the wrong passcode.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(passcode) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    if passcode_digest(&passcode) != st.admin_passcode_digest {
        return Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Wrong admin passcode"}),
        ));
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// SHA-256 digest of a passcode, as stored in [`AppState`].
pub fn passcode_digest(passcode: &str) -> [u8; 32] {
    Sha256::digest(passcode.as_bytes()).into()
}
