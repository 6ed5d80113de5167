mod common;

use sqlx::PgPool;
use std::sync::Arc;

use bookclub_picker::AppError;
use bookclub_picker::domain::entities::NewClub;
use bookclub_picker::domain::repositories::ClubRepository;
use bookclub_picker::infrastructure::persistence::PgClubRepository;

#[sqlx::test]
async fn test_create_club(pool: PgPool) {
    let repo = PgClubRepository::new(Arc::new(pool));

    let club = repo
        .create(NewClub {
            name: "Wednesday Humanities".to_string(),
            slug: "wed-club".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(club.name, "Wednesday Humanities");
    assert_eq!(club.slug, "wed-club");
}

#[sqlx::test]
async fn test_duplicate_slug_is_conflict(pool: PgPool) {
    let repo = PgClubRepository::new(Arc::new(pool));

    let new_club = NewClub {
        name: "Wednesday Humanities".to_string(),
        slug: "wed-club".to_string(),
    };

    repo.create(new_club.clone()).await.unwrap();
    let second = repo.create(new_club).await;

    assert!(matches!(second, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_find_by_slug(pool: PgPool) {
    common::create_test_club(&pool, "Wednesday Humanities", "wed-club").await;
    let repo = PgClubRepository::new(Arc::new(pool));

    let found = repo.find_by_slug("wed-club").await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "Wednesday Humanities");

    let missing = repo.find_by_slug("nobody-home").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_list_clubs(pool: PgPool) {
    common::create_test_club(&pool, "First", "first-club").await;
    common::create_test_club(&pool, "Second", "second-club").await;

    let repo = PgClubRepository::new(Arc::new(pool));

    let clubs = repo.list().await.unwrap();
    assert_eq!(clubs.len(), 2);
}
