//! Business logic services for the application layer.

pub mod admin_service;
pub mod history_service;
pub mod session_service;
pub mod voting_service;

pub use admin_service::AdminService;
pub use history_service::{HistoryService, SemesterArchive};
pub use session_service::{LinkParams, ResolvedSession, SessionService};
pub use voting_service::{BallotBoard, ToggleOutcome, VotingService};
