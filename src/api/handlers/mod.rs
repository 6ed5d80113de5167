//! HTTP request handlers.

pub mod admin;
pub mod books;
pub mod health;
pub mod history;
pub mod session;
pub mod votes;

pub use admin::{create_club_handler, create_invite_handler, create_semester_handler};
pub use books::add_book_handler;
pub use health::health_handler;
pub use history::history_handler;
pub use session::session_handler;
pub use votes::toggle_vote_handler;

use axum::http::HeaderMap;

/// Name of the header carrying the pseudonymous voter identity.
pub const VOTER_TOKEN_HEADER: &str = "x-voter-token";

/// Extracts the voter token header, if present and valid UTF-8.
pub(crate) fn voter_token_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(VOTER_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
