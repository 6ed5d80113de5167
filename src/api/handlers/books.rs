//! Handler for book suggestions.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::books::{AddBookRequest, BookDto};
use crate::error::AppError;
use crate::state::AppState;

/// Suggests a book for a club/semester pair.
///
/// # Endpoint
///
/// `POST /api/books`
///
/// # Request Body
///
/// ```json
/// {
///   "club_id": "…",
///   "semester_id": "…",
///   "title": "The Dispossessed",
///   "author": "Ursula K. Le Guin",
///   "suggested_by": "mina"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 before any store mutation when the title is missing or
/// blank.
pub async fn add_book_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddBookRequest>,
) -> Result<(StatusCode, Json<BookDto>), AppError> {
    payload.validate()?;

    let book = state.voting_service.suggest(payload.into_new_book()).await?;

    Ok((StatusCode::CREATED, Json(book.into())))
}
