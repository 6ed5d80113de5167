//! DTOs for the vote toggle endpoint.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to toggle the caller's vote on a book.
///
/// The voter is identified by the `X-Voter-Token` header, not the body.
#[derive(Debug, Deserialize)]
pub struct ToggleVoteRequest {
    pub book_id: Uuid,
}

/// Post-toggle state of the book for this voter.
#[derive(Debug, Serialize)]
pub struct ToggleVoteResponse {
    pub book_id: Uuid,
    /// Whether the caller holds a vote on the book after the toggle.
    pub voted: bool,
    /// The book's vote count after the toggle.
    pub votes: i64,
}
