//! PostgreSQL implementation of club repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Club, NewClub};
use crate::domain::repositories::ClubRepository;
use crate::error::AppError;

/// PostgreSQL repository for clubs.
///
/// Queries are runtime-checked with explicit binds; rows are mapped through
/// a private row struct so the domain entity stays free of sqlx derives.
pub struct PgClubRepository {
    pool: Arc<PgPool>,
}

impl PgClubRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClubRow {
    id: Uuid,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl From<ClubRow> for Club {
    fn from(r: ClubRow) -> Self {
        Club::new(r.id, r.name, r.slug, r.created_at)
    }
}

#[async_trait]
impl ClubRepository for PgClubRepository {
    async fn create(&self, new_club: NewClub) -> Result<Club, AppError> {
        let row = sqlx::query_as::<_, ClubRow>(
            r#"
            INSERT INTO clubs (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(&new_club.name)
        .bind(&new_club.slug)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Club>, AppError> {
        let row = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT id, name, slug, created_at
            FROM clubs
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Club>, AppError> {
        let rows = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT id, name, slug, created_at
            FROM clubs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
