//! PostgreSQL implementation of vote repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewVote, Vote};
use crate::domain::repositories::VoteRepository;
use crate::error::AppError;

/// PostgreSQL repository for votes.
///
/// The `(book_id, voter_token)` UNIQUE constraint makes the store the
/// authority on duplicate votes; a violated insert comes back as
/// [`AppError::Conflict`] through the shared sqlx error mapping.
pub struct PgVoteRepository {
    pool: Arc<PgPool>,
}

impl PgVoteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct VoteRow {
    id: Uuid,
    book_id: Uuid,
    voter_token: String,
    created_at: DateTime<Utc>,
}

impl From<VoteRow> for Vote {
    fn from(r: VoteRow) -> Self {
        Vote::new(r.id, r.book_id, r.voter_token, r.created_at)
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    async fn create(&self, new_vote: NewVote) -> Result<Vote, AppError> {
        let row = sqlx::query_as::<_, VoteRow>(
            r#"
            INSERT INTO votes (book_id, voter_token)
            VALUES ($1, $2)
            RETURNING id, book_id, voter_token, created_at
            "#,
        )
        .bind(new_vote.book_id)
        .bind(&new_vote.voter_token)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM votes WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_books(&self, book_ids: &[Uuid]) -> Result<Vec<Vote>, AppError> {
        if book_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, VoteRow>(
            r#"
            SELECT id, book_id, voter_token, created_at
            FROM votes
            WHERE book_id = ANY($1)
            ORDER BY created_at ASC
            "#,
        )
        .bind(book_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_for_book(&self, book_id: Uuid) -> Result<Vec<Vote>, AppError> {
        let rows = sqlx::query_as::<_, VoteRow>(
            r#"
            SELECT id, book_id, voter_token, created_at
            FROM votes
            WHERE book_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(book_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
