//! Repository trait for club data access.

use crate::domain::entities::{Club, NewClub};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for clubs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClubRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Creates a new club.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_club: NewClub) -> Result<Club, AppError>;

    /// Finds a club by its URL-safe slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Club))` if found
    /// - `Ok(None)` if no club carries the slug - an unknown link is a valid
    ///   state, not an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Club>, AppError>;

    /// Lists all clubs, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Club>, AppError>;
}
