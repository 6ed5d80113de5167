//! Handler for session resolution.

use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
};

use crate::api::dto::session::{SessionQuery, SessionResponse};
use crate::api::handlers::voter_token_header;
use crate::application::services::LinkParams;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a secret link and returns the full voting view.
///
/// # Endpoint
///
/// `GET /api/session?club=<slug>&invite=<code>&semester=<id>`
///
/// # Headers
///
/// - `X-Voter-Token` (optional) - fills `my_votes` with the caller's ballot
///
/// # Behavior
///
/// A missing `club` parameter, an unknown slug, or a semester that does not
/// belong to the club all yield `resolved: false` with empty lists and
/// status 200; an unknown link is a state, not an error. When the link
/// resolves, books come back ranked by vote count with ties in submission
/// order.
pub async fn session_handler(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, AppError> {
    let params = LinkParams {
        club: query.club,
        invite: query.invite,
        semester: query.semester,
    };

    let resolved = state.session_service.resolve(&params).await?;

    match (resolved.club, resolved.semester) {
        (Some(club), Some(semester)) => {
            let board = state.voting_service.load_board(club, semester).await?;
            let voter = voter_token_header(&headers);

            Ok(Json(SessionResponse::from_board(
                &board,
                params.invite,
                voter.as_deref(),
            )))
        }
        (club, semester) => Ok(Json(SessionResponse::unresolved(
            club.as_ref(),
            semester.as_ref(),
            params.invite,
        ))),
    }
}
