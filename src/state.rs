//! Shared application state wiring services to their PostgreSQL backends.

use std::sync::Arc;

use sqlx::PgPool;

use crate::api::middleware::admin_auth::passcode_digest;
use crate::application::services::{AdminService, HistoryService, SessionService, VotingService};
use crate::infrastructure::persistence::{
    PgBookRepository, PgClubRepository, PgInviteRepository, PgSemesterRepository, PgVoteRepository,
};

/// Session resolution over the PostgreSQL repositories.
pub type PgSessionService = SessionService<PgClubRepository, PgSemesterRepository>;
/// Voting workflow over the PostgreSQL repositories.
pub type PgVotingService = VotingService<PgBookRepository, PgVoteRepository>;
/// History aggregation over the PostgreSQL repositories.
pub type PgHistoryService =
    HistoryService<PgSemesterRepository, PgBookRepository, PgVoteRepository>;
/// Admin workflow over the PostgreSQL repositories.
pub type PgAdminService = AdminService<PgClubRepository, PgSemesterRepository, PgInviteRepository>;

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<PgSessionService>,
    pub voting_service: Arc<PgVotingService>,
    pub history_service: Arc<PgHistoryService>,
    pub admin_service: Arc<PgAdminService>,
    /// Pool handle kept for health checks.
    pub db: Arc<PgPool>,
    /// Base URL share links are built on.
    pub base_url: String,
    /// SHA-256 digest of the admin passcode.
    pub admin_passcode_digest: [u8; 32],
}

impl AppState {
    /// Wires repositories and services around a connection pool.
    pub fn new(pool: Arc<PgPool>, base_url: String, admin_passcode: &str) -> Self {
        let clubs = Arc::new(PgClubRepository::new(pool.clone()));
        let semesters = Arc::new(PgSemesterRepository::new(pool.clone()));
        let invites = Arc::new(PgInviteRepository::new(pool.clone()));
        let books = Arc::new(PgBookRepository::new(pool.clone()));
        let votes = Arc::new(PgVoteRepository::new(pool.clone()));

        Self {
            session_service: Arc::new(SessionService::new(clubs.clone(), semesters.clone())),
            voting_service: Arc::new(VotingService::new(books.clone(), votes.clone())),
            history_service: Arc::new(HistoryService::new(semesters.clone(), books, votes)),
            admin_service: Arc::new(AdminService::new(clubs, semesters, invites)),
            db: pool,
            base_url,
            admin_passcode_digest: passcode_digest(admin_passcode),
        }
    }
}
