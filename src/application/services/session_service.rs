//! Session resolution from secret-link parameters.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Club, Semester};
use crate::domain::repositories::{ClubRepository, SemesterRepository};
use crate::error::AppError;

/// Raw link parameters as they arrive from a query string or CLI flags.
///
/// `invite` is carried for display and identity-context purposes only; it is
/// never checked against the invite table to gate access.
#[derive(Debug, Clone, Default)]
pub struct LinkParams {
    pub club: Option<String>,
    pub invite: Option<String>,
    pub semester: Option<String>,
}

/// Outcome of resolving link parameters.
///
/// Both fields `None` is the normal "need a link" / "unknown link" state,
/// not an error.
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub club: Option<Club>,
    pub semester: Option<Semester>,
}

impl ResolvedSession {
    fn unresolved() -> Self {
        Self {
            club: None,
            semester: None,
        }
    }

    /// True when both a club and a semester were found.
    pub fn is_resolved(&self) -> bool {
        self.club.is_some() && self.semester.is_some()
    }
}

/// Service resolving a `(club, invite, semester)` link to entities.
pub struct SessionService<C: ClubRepository, S: SemesterRepository> {
    clubs: Arc<C>,
    semesters: Arc<S>,
}

impl<C: ClubRepository, S: SemesterRepository> SessionService<C, S> {
    /// Creates a new session service.
    pub fn new(clubs: Arc<C>, semesters: Arc<S>) -> Self {
        Self { clubs, semesters }
    }

    /// Resolves link parameters to a club and semester.
    ///
    /// - no `club` parameter, or an unknown slug, resolves to nothing and
    ///   downstream workflows stay disabled
    /// - an explicit `semester` parameter must parse as a UUID, exist, and
    ///   belong to the resolved club; otherwise the semester stays
    ///   unresolved rather than rendering another club's round
    /// - without a `semester` parameter, the club's semester with the most
    ///   recent start date is current
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Unknown slugs and
    /// ids are not errors.
    pub async fn resolve(&self, params: &LinkParams) -> Result<ResolvedSession, AppError> {
        let Some(slug) = params.club.as_deref() else {
            return Ok(ResolvedSession::unresolved());
        };

        let Some(club) = self.clubs.find_by_slug(slug).await? else {
            tracing::debug!(slug, "unknown club slug in link");
            return Ok(ResolvedSession::unresolved());
        };

        let semester = match params.semester.as_deref() {
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(id) => self
                    .semesters
                    .find_by_id(id)
                    .await?
                    .filter(|s| s.club_id == club.id),
                Err(_) => None,
            },
            None => self.semesters.latest_for_club(club.id).await?,
        };

        Ok(ResolvedSession {
            club: Some(club),
            semester,
        })
    }

    /// Finds a club by slug without touching semesters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_club(&self, slug: &str) -> Result<Option<Club>, AppError> {
        self.clubs.find_by_slug(slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockClubRepository, MockSemesterRepository};
    use chrono::{NaiveDate, Utc};

    fn test_club(slug: &str) -> Club {
        Club::new(
            Uuid::new_v4(),
            "Wednesday Humanities".to_string(),
            slug.to_string(),
            Utc::now(),
        )
    }

    fn test_semester(club_id: Uuid, title: &str) -> Semester {
        Semester::new(
            Uuid::new_v4(),
            club_id,
            title.to_string(),
            NaiveDate::from_ymd_opt(2025, 9, 1),
            None,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_resolve_without_club_param() {
        let service = SessionService::new(
            Arc::new(MockClubRepository::new()),
            Arc::new(MockSemesterRepository::new()),
        );

        let resolved = service.resolve(&LinkParams::default()).await.unwrap();

        assert!(resolved.club.is_none());
        assert!(resolved.semester.is_none());
        assert!(!resolved.is_resolved());
    }

    #[tokio::test]
    async fn test_resolve_unknown_slug() {
        let mut clubs = MockClubRepository::new();
        clubs
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        let service = SessionService::new(Arc::new(clubs), Arc::new(MockSemesterRepository::new()));

        let params = LinkParams {
            club: Some("nobody-home".to_string()),
            ..Default::default()
        };
        let resolved = service.resolve(&params).await.unwrap();

        assert!(resolved.club.is_none());
        assert!(resolved.semester.is_none());
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_latest_semester() {
        let club = test_club("wed-club");
        let semester = test_semester(club.id, "2025 Fall");
        let semester_id = semester.id;

        let mut clubs = MockClubRepository::new();
        let club_clone = club.clone();
        clubs
            .expect_find_by_slug()
            .withf(|slug| slug == "wed-club")
            .times(1)
            .returning(move |_| Ok(Some(club_clone.clone())));

        let mut semesters = MockSemesterRepository::new();
        semesters
            .expect_latest_for_club()
            .withf(move |id| *id == club.id)
            .times(1)
            .returning(move |_| Ok(Some(semester.clone())));

        let service = SessionService::new(Arc::new(clubs), Arc::new(semesters));

        let params = LinkParams {
            club: Some("wed-club".to_string()),
            invite: Some("x7kq2m9f".to_string()),
            semester: None,
        };
        let resolved = service.resolve(&params).await.unwrap();

        assert!(resolved.is_resolved());
        assert_eq!(resolved.semester.unwrap().id, semester_id);
    }

    #[tokio::test]
    async fn test_resolve_explicit_semester() {
        let club = test_club("wed-club");
        let semester = test_semester(club.id, "2024 Spring");
        let semester_id = semester.id;

        let mut clubs = MockClubRepository::new();
        let club_clone = club.clone();
        clubs
            .expect_find_by_slug()
            .returning(move |_| Ok(Some(club_clone.clone())));

        let mut semesters = MockSemesterRepository::new();
        semesters
            .expect_find_by_id()
            .withf(move |id| *id == semester_id)
            .times(1)
            .returning(move |_| Ok(Some(semester.clone())));

        let service = SessionService::new(Arc::new(clubs), Arc::new(semesters));

        let params = LinkParams {
            club: Some("wed-club".to_string()),
            invite: None,
            semester: Some(semester_id.to_string()),
        };
        let resolved = service.resolve(&params).await.unwrap();

        assert_eq!(resolved.semester.unwrap().id, semester_id);
    }

    #[tokio::test]
    async fn test_resolve_rejects_semester_of_another_club() {
        let club = test_club("wed-club");
        let foreign = test_semester(Uuid::new_v4(), "someone else's round");
        let foreign_id = foreign.id;

        let mut clubs = MockClubRepository::new();
        let club_clone = club.clone();
        clubs
            .expect_find_by_slug()
            .returning(move |_| Ok(Some(club_clone.clone())));

        let mut semesters = MockSemesterRepository::new();
        semesters
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(foreign.clone())));

        let service = SessionService::new(Arc::new(clubs), Arc::new(semesters));

        let params = LinkParams {
            club: Some("wed-club".to_string()),
            invite: None,
            semester: Some(foreign_id.to_string()),
        };
        let resolved = service.resolve(&params).await.unwrap();

        assert!(resolved.club.is_some());
        assert!(resolved.semester.is_none());
    }

    #[tokio::test]
    async fn test_resolve_ignores_malformed_semester_id() {
        let club = test_club("wed-club");

        let mut clubs = MockClubRepository::new();
        clubs
            .expect_find_by_slug()
            .returning(move |_| Ok(Some(club.clone())));

        // No semester repository expectations: a malformed id must not reach
        // the store at all.
        let service = SessionService::new(Arc::new(clubs), Arc::new(MockSemesterRepository::new()));

        let params = LinkParams {
            club: Some("wed-club".to_string()),
            invite: None,
            semester: Some("not-a-uuid".to_string()),
        };
        let resolved = service.resolve(&params).await.unwrap();

        assert!(resolved.club.is_some());
        assert!(resolved.semester.is_none());
    }
}
