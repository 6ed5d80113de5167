//! Repository trait for invite data access.

use crate::domain::entities::{Invite, NewInvite};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for invite codes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgInviteRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InviteRepository: Send + Sync {
    /// Stores a freshly minted invite code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_invite: NewInvite) -> Result<Invite, AppError>;

    /// Lists a club's invites, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_club(&self, club_id: Uuid) -> Result<Vec<Invite>, AppError>;
}
