//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits. Queries are
//! runtime-bound sqlx statements mapped through private `FromRow` structs,
//! so entities stay plain and the crate builds without a live database.
//!
//! # Repositories
//!
//! - [`PgClubRepository`] - Club storage and slug lookup
//! - [`PgSemesterRepository`] - Semester storage and latest/ordered queries
//! - [`PgInviteRepository`] - Invite code storage
//! - [`PgBookRepository`] - Book storage and per-semester listing
//! - [`PgVoteRepository`] - Vote cast/retract and per-book listing

pub mod pg_book_repository;
pub mod pg_club_repository;
pub mod pg_invite_repository;
pub mod pg_semester_repository;
pub mod pg_vote_repository;

pub use pg_book_repository::PgBookRepository;
pub use pg_club_repository::PgClubRepository;
pub use pg_invite_repository::PgInviteRepository;
pub use pg_semester_repository::PgSemesterRepository;
pub use pg_vote_repository::PgVoteRepository;
