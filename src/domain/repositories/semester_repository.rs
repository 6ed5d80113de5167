//! Repository trait for semester data access.

use crate::domain::entities::{NewSemester, Semester};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for semesters.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSemesterRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SemesterRepository: Send + Sync {
    /// Creates a new semester for a club.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_semester: NewSemester) -> Result<Semester, AppError>;

    /// Finds a semester by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Semester>, AppError>;

    /// Returns the club's semester with the most recent start date.
    ///
    /// Semesters without a start date sort last; ties beyond start date fall
    /// back to creation time and are otherwise arbitrary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn latest_for_club(&self, club_id: Uuid) -> Result<Option<Semester>, AppError>;

    /// Lists all of a club's semesters, most recent start date first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_club(&self, club_id: Uuid) -> Result<Vec<Semester>, AppError>;
}
