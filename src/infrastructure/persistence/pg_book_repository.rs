//! PostgreSQL implementation of book repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// PostgreSQL repository for recommended books.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    club_id: Uuid,
    semester_id: Uuid,
    title: String,
    author: Option<String>,
    isbn: Option<String>,
    info_url: Option<String>,
    cover_url: Option<String>,
    suggested_by: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(r: BookRow) -> Self {
        Book::new(
            r.id,
            r.club_id,
            r.semester_id,
            r.title,
            r.author,
            r.isbn,
            r.info_url,
            r.cover_url,
            r.suggested_by,
            r.created_at,
        )
    }
}

const BOOK_COLUMNS: &str =
    "id, club_id, semester_id, title, author, isbn, info_url, cover_url, suggested_by, created_at";

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            INSERT INTO books
                (club_id, semester_id, title, author, isbn, info_url, cover_url, suggested_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(new_book.club_id)
        .bind(new_book.semester_id)
        .bind(&new_book.title)
        .bind(&new_book.author)
        .bind(&new_book.isbn)
        .bind(&new_book.info_url)
        .bind(&new_book.cover_url)
        .bind(&new_book.suggested_by)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_for_semester(
        &self,
        club_id: Uuid,
        semester_id: Uuid,
    ) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE club_id = $1 AND semester_id = $2
            ORDER BY created_at ASC
            "#
        ))
        .bind(club_id)
        .bind(semester_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
