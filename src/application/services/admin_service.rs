//! Administrative operations: clubs, semesters, invite links.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{Club, Invite, NewClub, NewInvite, NewSemester, Semester};
use crate::domain::repositories::{ClubRepository, InviteRepository, SemesterRepository};
use crate::error::AppError;
use crate::utils::invite_code::generate_invite_code;
use crate::utils::slug::validate_slug;
use serde_json::json;

/// Service behind the passcode-guarded admin surface.
///
/// These are the operations the original admin panel offered: create a
/// club, open a semester for it, and mint invite codes for sharing.
pub struct AdminService<C: ClubRepository, S: SemesterRepository, I: InviteRepository> {
    clubs: Arc<C>,
    semesters: Arc<S>,
    invites: Arc<I>,
}

impl<C: ClubRepository, S: SemesterRepository, I: InviteRepository> AdminService<C, S, I> {
    /// Creates a new admin service.
    pub fn new(clubs: Arc<C>, semesters: Arc<S>, invites: Arc<I>) -> Self {
        Self {
            clubs,
            semesters,
            invites,
        }
    }

    /// Creates a club with a validated slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank name or malformed slug,
    /// [`AppError::Conflict`] when the slug is taken, and
    /// [`AppError::Internal`] on database errors.
    pub async fn create_club(&self, name: &str, slug: &str) -> Result<Club, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request("Club name is required", json!({})));
        }

        let slug = slug.trim();
        validate_slug(slug)?;

        self.clubs
            .create(NewClub {
                name: name.to_string(),
                slug: slug.to_string(),
            })
            .await
    }

    /// Opens a semester for the club behind `club_slug`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown club,
    /// [`AppError::Validation`] for a blank title, and
    /// [`AppError::Internal`] on database errors.
    pub async fn create_semester(
        &self,
        club_slug: &str,
        title: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Semester, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::bad_request(
                "Semester title is required",
                json!({}),
            ));
        }

        let club = self.require_club(club_slug).await?;

        self.semesters
            .create(NewSemester {
                club_id: club.id,
                title: title.to_string(),
                start_date,
                end_date,
            })
            .await
    }

    /// Mints an invite code for the club behind `club_slug`.
    ///
    /// The code is 8 characters of OS entropy; a collision with an existing
    /// code is astronomically unlikely and surfaces as a conflict rather
    /// than being retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown club,
    /// [`AppError::Conflict`] on a code collision, and
    /// [`AppError::Internal`] on database errors.
    pub async fn create_invite(
        &self,
        club_slug: &str,
        note: Option<String>,
    ) -> Result<(Club, Invite), AppError> {
        let club = self.require_club(club_slug).await?;

        let invite = self
            .invites
            .create(NewInvite {
                club_id: club.id,
                code: generate_invite_code(),
                note: note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            })
            .await?;

        Ok((club, invite))
    }

    /// Lists all clubs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_clubs(&self) -> Result<Vec<Club>, AppError> {
        self.clubs.list().await
    }

    /// Lists a club's semesters, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown club and
    /// [`AppError::Internal`] on database errors.
    pub async fn list_semesters(&self, club_slug: &str) -> Result<Vec<Semester>, AppError> {
        let club = self.require_club(club_slug).await?;
        self.semesters.list_for_club(club.id).await
    }

    /// Lists a club's invites, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown club and
    /// [`AppError::Internal`] on database errors.
    pub async fn list_invites(&self, club_slug: &str) -> Result<Vec<Invite>, AppError> {
        let club = self.require_club(club_slug).await?;
        self.invites.list_for_club(club.id).await
    }

    async fn require_club(&self, slug: &str) -> Result<Club, AppError> {
        self.clubs
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Club not found", json!({ "slug": slug })))
    }
}
