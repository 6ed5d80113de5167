//! Semester entity, a time-boxed voting round within a club.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A voting round scoped to one club.
///
/// Dates are optional; when a link does not pin a semester explicitly, the
/// one with the most recent `start_date` is treated as current.
#[derive(Debug, Clone)]
pub struct Semester {
    pub id: Uuid,
    pub club_id: Uuid,
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Semester {
    /// Creates a new Semester instance.
    pub fn new(
        id: Uuid,
        club_id: Uuid,
        title: String,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            club_id,
            title,
            start_date,
            end_date,
            created_at,
        }
    }
}

/// Input data for creating a new semester.
#[derive(Debug, Clone)]
pub struct NewSemester {
    pub club_id: Uuid,
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_creation() {
        let club_id = Uuid::new_v4();
        let start = NaiveDate::from_ymd_opt(2025, 9, 1);
        let semester = Semester::new(
            Uuid::new_v4(),
            club_id,
            "2025 Fall".to_string(),
            start,
            None,
            Utc::now(),
        );

        assert_eq!(semester.club_id, club_id);
        assert_eq!(semester.title, "2025 Fall");
        assert_eq!(semester.start_date, start);
        assert!(semester.end_date.is_none());
    }
}
