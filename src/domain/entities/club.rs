//! Club entity, the root of all other entities.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A reading group reachable through its URL-safe slug.
///
/// Clubs are created by an administrator and immutable afterwards; members
/// only ever see the club their secret link points at.
#[derive(Debug, Clone)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl Club {
    /// Creates a new Club instance.
    pub fn new(id: Uuid, name: String, slug: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            slug,
            created_at,
        }
    }
}

/// Input data for creating a new club.
#[derive(Debug, Clone)]
pub struct NewClub {
    pub name: String,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_creation() {
        let now = Utc::now();
        let club = Club::new(
            Uuid::new_v4(),
            "Wednesday Humanities".to_string(),
            "wed-club".to_string(),
            now,
        );

        assert_eq!(club.name, "Wednesday Humanities");
        assert_eq!(club.slug, "wed-club");
        assert_eq!(club.created_at, now);
    }
}
