//! Repository trait definitions for the domain layer.
//!
//! These traits are the data store gateway: generic read/write access to the
//! five collections, implemented against PostgreSQL in
//! `crate::infrastructure::persistence` and mocked via `mockall` in unit
//! tests. Every operation is a fallible network call with no hidden retries,
//! and multi-step sequences are not transactional; interleaving by other
//! clients is tolerated by design.

pub mod book_repository;
pub mod club_repository;
pub mod invite_repository;
pub mod semester_repository;
pub mod vote_repository;

pub use book_repository::BookRepository;
pub use club_repository::ClubRepository;
pub use invite_repository::InviteRepository;
pub use semester_repository::SemesterRepository;
pub use vote_repository::VoteRepository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use club_repository::MockClubRepository;
#[cfg(test)]
pub use invite_repository::MockInviteRepository;
#[cfg(test)]
pub use semester_repository::MockSemesterRepository;
#[cfg(test)]
pub use vote_repository::MockVoteRepository;
