mod common;

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use bookclub_picker::api::routes::public_routes;

fn test_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .nest("/api", public_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

async fn seed_book(pool: &PgPool) -> Uuid {
    let club_id = common::create_test_club(pool, "Wednesday Humanities", "wed-club").await;
    let semester_id = common::create_test_semester(pool, club_id, "2025 Fall", None).await;
    common::create_test_book(pool, club_id, semester_id, "Book A").await
}

#[sqlx::test]
async fn test_toggle_round_trip(pool: PgPool) {
    let book_id = seed_book(&pool).await;
    let server = test_server(pool.clone());

    // First toggle casts.
    let response = server
        .post("/api/votes/toggle")
        .add_header("x-voter-token", "voter-x")
        .json(&json!({ "book_id": book_id }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["voted"], true);
    assert_eq!(body["votes"], 1);

    // Second toggle retracts, back to the pre-vote state.
    let response = server
        .post("/api/votes/toggle")
        .add_header("x-voter-token", "voter-x")
        .json(&json!({ "book_id": book_id }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["voted"], false);
    assert_eq!(body["votes"], 0);

    assert_eq!(common::count_votes(&pool).await, 0);
}

#[sqlx::test]
async fn test_toggle_counts_other_voters(pool: PgPool) {
    let book_id = seed_book(&pool).await;
    common::create_test_vote(&pool, book_id, "voter-y").await;

    let server = test_server(pool);

    let response = server
        .post("/api/votes/toggle")
        .add_header("x-voter-token", "voter-x")
        .json(&json!({ "book_id": book_id }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["voted"], true);
    assert_eq!(body["votes"], 2);
}

#[sqlx::test]
async fn test_toggle_without_token_is_rejected(pool: PgPool) {
    let book_id = seed_book(&pool).await;
    let server = test_server(pool.clone());

    let response = server
        .post("/api/votes/toggle")
        .json(&json!({ "book_id": book_id }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(common::count_votes(&pool).await, 0);
}

#[sqlx::test]
async fn test_toggle_unknown_book(pool: PgPool) {
    let server = test_server(pool);

    let response = server
        .post("/api/votes/toggle")
        .add_header("x-voter-token", "voter-x")
        .json(&json!({ "book_id": Uuid::new_v4() }))
        .await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}
