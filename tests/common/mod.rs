#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use bookclub_picker::state::AppState;

pub const TEST_PASSCODE: &str = "test-passcode";
pub const TEST_BASE_URL: &str = "http://localhost:3000/";

pub async fn create_test_club(pool: &PgPool, name: &str, slug: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO clubs (name, slug) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_semester(
    pool: &PgPool,
    club_id: Uuid,
    title: &str,
    start_date: Option<NaiveDate>,
) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO semesters (club_id, title, start_date) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(club_id)
    .bind(title)
    .bind(start_date)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_book(pool: &PgPool, club_id: Uuid, semester_id: Uuid, title: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO books (club_id, semester_id, title) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(club_id)
    .bind(semester_id)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a book with an explicit creation time, for submission-order tests.
pub async fn create_test_book_at(
    pool: &PgPool,
    club_id: Uuid,
    semester_id: Uuid,
    title: &str,
    created_at: DateTime<Utc>,
) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO books (club_id, semester_id, title, created_at) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(club_id)
    .bind(semester_id)
    .bind(title)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_vote(pool: &PgPool, book_id: Uuid, voter_token: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO votes (book_id, voter_token) VALUES ($1, $2) RETURNING id")
        .bind(book_id)
        .bind(voter_token)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_books(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_votes(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM votes")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        TEST_BASE_URL.to_string(),
        TEST_PASSCODE,
    )
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
