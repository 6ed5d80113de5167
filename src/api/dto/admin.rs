//! DTOs for the passcode-guarded admin endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::Invite;

/// Request to create a club.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClubRequest {
    #[validate(length(min = 1, message = "Club name is required"))]
    pub name: String,

    /// URL-safe identifier; full slug rules are enforced by the admin
    /// workflow before the insert.
    #[validate(length(min = 2, max = 40))]
    pub slug: String,
}

/// Request to open a semester for a club.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSemesterRequest {
    pub club_slug: String,

    #[validate(length(min = 1, message = "Semester title is required"))]
    pub title: String,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Request to mint an invite link for a club.
///
/// `semester_id` only pins the semester inside the generated share link;
/// the invite row itself is club-scoped.
#[derive(Debug, Deserialize)]
pub struct CreateInviteRequest {
    pub club_slug: String,
    pub note: Option<String>,
    pub semester_id: Option<Uuid>,
}

/// A minted invite together with its ready-to-share link.
#[derive(Debug, Serialize)]
pub struct InviteResponse {
    pub id: Uuid,
    pub club_slug: String,
    pub code: String,
    pub note: Option<String>,
    pub share_url: String,
}

impl InviteResponse {
    /// Builds the response from the stored invite and assembled link.
    pub fn new(invite: Invite, club_slug: String, share_url: String) -> Self {
        Self {
            id: invite.id,
            club_slug,
            code: invite.code,
            note: invite.note,
            share_url,
        }
    }
}
