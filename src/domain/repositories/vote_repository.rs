//! Repository trait for vote data access.

use crate::domain::entities::{NewVote, Vote};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for votes.
///
/// The `(book_id, voter_token)` uniqueness invariant lives in the database;
/// this interface only surfaces its violation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVoteRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Casts a vote.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if this voter token already holds a
    /// vote on the book; two near-simultaneous toggles from the same
    /// voter can race into this; the caller surfaces it without retrying.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_vote: NewVote) -> Result<Vote, AppError>;

    /// Deletes a vote by its row id.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if it was
    /// already gone.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Lists every vote referencing any of the given books.
    ///
    /// An empty id slice yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_books(&self, book_ids: &[Uuid]) -> Result<Vec<Vote>, AppError>;

    /// Lists the votes on a single book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_book(&self, book_id: Uuid) -> Result<Vec<Vote>, AppError>;
}
