//! PostgreSQL implementation of invite repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Invite, NewInvite};
use crate::domain::repositories::InviteRepository;
use crate::error::AppError;

/// PostgreSQL repository for invite codes.
pub struct PgInviteRepository {
    pool: Arc<PgPool>,
}

impl PgInviteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct InviteRow {
    id: Uuid,
    club_id: Uuid,
    code: String,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<InviteRow> for Invite {
    fn from(r: InviteRow) -> Self {
        Invite::new(r.id, r.club_id, r.code, r.note, r.created_at)
    }
}

#[async_trait]
impl InviteRepository for PgInviteRepository {
    async fn create(&self, new_invite: NewInvite) -> Result<Invite, AppError> {
        let row = sqlx::query_as::<_, InviteRow>(
            r#"
            INSERT INTO invites (club_id, code, note)
            VALUES ($1, $2, $3)
            RETURNING id, club_id, code, note, created_at
            "#,
        )
        .bind(new_invite.club_id)
        .bind(&new_invite.code)
        .bind(&new_invite.note)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_club(&self, club_id: Uuid) -> Result<Vec<Invite>, AppError> {
        let rows = sqlx::query_as::<_, InviteRow>(
            r#"
            SELECT id, club_id, code, note, created_at
            FROM invites
            WHERE club_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(club_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
