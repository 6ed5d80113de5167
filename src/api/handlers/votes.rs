//! Handler for vote toggling.

use axum::{Json, extract::State, http::HeaderMap};
use serde_json::json;

use crate::api::dto::votes::{ToggleVoteRequest, ToggleVoteResponse};
use crate::api::handlers::voter_token_header;
use crate::error::AppError;
use crate::state::AppState;

/// Toggles the caller's vote on a book.
///
/// # Endpoint
///
/// `POST /api/votes/toggle`
///
/// # Headers
///
/// - `X-Voter-Token` (required) - the caller's pseudonymous identity
///
/// # Behavior
///
/// The store's current rows decide the direction: no vote ⇒ cast, existing
/// vote ⇒ retract. Two rapid toggles from the same voter can race; the
/// losing insert returns 409 and the client is expected to refetch rather
/// than retry.
///
/// # Errors
///
/// - 400 when the voter token header is missing
/// - 404 for an unknown book id
/// - 409 when a concurrent duplicate vote wins the race
pub async fn toggle_vote_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ToggleVoteRequest>,
) -> Result<Json<ToggleVoteResponse>, AppError> {
    let voter = voter_token_header(&headers).ok_or_else(|| {
        AppError::bad_request("Voter token required", json!({ "header": "X-Voter-Token" }))
    })?;

    let outcome = state.voting_service.toggle(payload.book_id, &voter).await?;

    Ok(Json(ToggleVoteResponse {
        book_id: payload.book_id,
        voted: outcome.voted,
        votes: outcome.votes,
    }))
}
