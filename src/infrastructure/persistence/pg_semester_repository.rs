//! PostgreSQL implementation of semester repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewSemester, Semester};
use crate::domain::repositories::SemesterRepository;
use crate::error::AppError;

/// PostgreSQL repository for semesters.
pub struct PgSemesterRepository {
    pool: Arc<PgPool>,
}

impl PgSemesterRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SemesterRow {
    id: Uuid,
    club_id: Uuid,
    title: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl From<SemesterRow> for Semester {
    fn from(r: SemesterRow) -> Self {
        Semester::new(
            r.id,
            r.club_id,
            r.title,
            r.start_date,
            r.end_date,
            r.created_at,
        )
    }
}

const SEMESTER_COLUMNS: &str = "id, club_id, title, start_date, end_date, created_at";

#[async_trait]
impl SemesterRepository for PgSemesterRepository {
    async fn create(&self, new_semester: NewSemester) -> Result<Semester, AppError> {
        let row = sqlx::query_as::<_, SemesterRow>(&format!(
            r#"
            INSERT INTO semesters (club_id, title, start_date, end_date)
            VALUES ($1, $2, $3, $4)
            RETURNING {SEMESTER_COLUMNS}
            "#
        ))
        .bind(new_semester.club_id)
        .bind(&new_semester.title)
        .bind(new_semester.start_date)
        .bind(new_semester.end_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Semester>, AppError> {
        let row = sqlx::query_as::<_, SemesterRow>(&format!(
            "SELECT {SEMESTER_COLUMNS} FROM semesters WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn latest_for_club(&self, club_id: Uuid) -> Result<Option<Semester>, AppError> {
        let row = sqlx::query_as::<_, SemesterRow>(&format!(
            r#"
            SELECT {SEMESTER_COLUMNS}
            FROM semesters
            WHERE club_id = $1
            ORDER BY start_date DESC NULLS LAST, created_at DESC
            LIMIT 1
            "#
        ))
        .bind(club_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_for_club(&self, club_id: Uuid) -> Result<Vec<Semester>, AppError> {
        let rows = sqlx::query_as::<_, SemesterRow>(&format!(
            r#"
            SELECT {SEMESTER_COLUMNS}
            FROM semesters
            WHERE club_id = $1
            ORDER BY start_date DESC NULLS LAST, created_at DESC
            "#
        ))
        .bind(club_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
