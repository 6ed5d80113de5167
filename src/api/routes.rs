//! REST API route groups.

use axum::Router;
use axum::routing::{get, post};

use crate::api::handlers::{
    add_book_handler, create_club_handler, create_invite_handler, create_semester_handler,
    history_handler, session_handler, toggle_vote_handler,
};
use crate::state::AppState;

/// Member-facing routes: anyone holding a link can call these.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(session_handler))
        .route("/books", post(add_book_handler))
        .route("/votes/toggle", post(toggle_vote_handler))
        .route("/history", get(history_handler))
}

/// Admin routes; callers must present the admin passcode as a Bearer token.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/clubs", post(create_club_handler))
        .route("/admin/semesters", post(create_semester_handler))
        .route("/admin/invites", post(create_invite_handler))
}
