//! Vote entity, one voter token's ballot mark on one book.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single vote.
///
/// The pair `(book_id, voter_token)` is unique; the database constraint,
/// not the client, is authoritative for that invariant. Votes are inserted
/// on cast and deleted on retraction, never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct Vote {
    pub id: Uuid,
    pub book_id: Uuid,
    pub voter_token: String,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Creates a new Vote instance.
    pub fn new(id: Uuid, book_id: Uuid, voter_token: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            book_id,
            voter_token,
            created_at,
        }
    }
}

/// Input data for casting a vote.
#[derive(Debug, Clone)]
pub struct NewVote {
    pub book_id: Uuid,
    pub voter_token: String,
}
