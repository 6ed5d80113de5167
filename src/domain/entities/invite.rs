//! Invite entity, the opaque code embedded in a shared secret link.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An invite code minted for one club.
///
/// Codes are link material only. They scope a voter's identity context but
/// are never checked against this table to gate access (link obscurity
/// model).
#[derive(Debug, Clone)]
pub struct Invite {
    pub id: Uuid,
    pub club_id: Uuid,
    pub code: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Invite {
    /// Creates a new Invite instance.
    pub fn new(
        id: Uuid,
        club_id: Uuid,
        code: String,
        note: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            club_id,
            code,
            note,
            created_at,
        }
    }
}

/// Input data for creating a new invite.
#[derive(Debug, Clone)]
pub struct NewInvite {
    pub club_id: Uuid,
    pub code: String,
    pub note: Option<String>,
}
