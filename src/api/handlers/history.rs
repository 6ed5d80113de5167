//! Handler for the club retrospective.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::history::{HistoryQuery, HistoryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns every semester of a club with independently tallied results.
///
/// # Endpoint
///
/// `GET /api/history?club=<slug>`
///
/// Semesters come back in descending start-date order; within each, books
/// are ranked by that semester's votes alone. Nothing is cached; the view
/// is recomputed on every call.
///
/// # Errors
///
/// Returns 404 for an unknown club slug. Unlike session resolution, the
/// history endpoint is asked for one specific club, so "not there" is an
/// error here.
pub async fn history_handler(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let club = state
        .session_service
        .find_club(&query.club)
        .await?
        .ok_or_else(|| AppError::not_found("Club not found", json!({ "slug": query.club })))?;

    let archives = state.history_service.history(&club).await?;

    Ok(Json(HistoryResponse::new(&club, &archives)))
}
