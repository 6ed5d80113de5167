//! Repository trait for book data access.

use crate::domain::entities::{Book, NewBook};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for recommended books.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts a new book.
    ///
    /// Callers validate the title before reaching the store; the repository
    /// persists whatever it is handed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError>;

    /// Finds a book by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, AppError>;

    /// Lists a semester's books in submission order (oldest first).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_semester(
        &self,
        club_id: Uuid,
        semester_id: Uuid,
    ) -> Result<Vec<Book>, AppError>;
}
