//! Read-only retrospective across a club's past semesters.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Book, Club, Semester};
use crate::domain::repositories::{BookRepository, SemesterRepository, VoteRepository};
use crate::domain::tally;
use crate::error::AppError;

/// One semester's results: its books ranked by votes and the raw tally.
#[derive(Debug, Clone)]
pub struct SemesterArchive {
    pub semester: Semester,
    pub books: Vec<Book>,
    pub tally: HashMap<Uuid, i64>,
}

/// Service assembling the per-semester history of a club.
///
/// Nothing is cached; every call refetches and recounts, applying the same
/// tally and ranking policy as the live voting view.
pub struct HistoryService<S: SemesterRepository, B: BookRepository, V: VoteRepository> {
    semesters: Arc<S>,
    books: Arc<B>,
    votes: Arc<V>,
}

impl<S: SemesterRepository, B: BookRepository, V: VoteRepository> HistoryService<S, B, V> {
    /// Creates a new history service.
    pub fn new(semesters: Arc<S>, books: Arc<B>, votes: Arc<V>) -> Self {
        Self {
            semesters,
            books,
            votes,
        }
    }

    /// Builds the archive for every semester of the club, most recent start
    /// date first. Each semester is tallied independently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn history(&self, club: &Club) -> Result<Vec<SemesterArchive>, AppError> {
        let semesters = self.semesters.list_for_club(club.id).await?;

        let mut archives = Vec::with_capacity(semesters.len());

        for semester in semesters {
            let books = self
                .books
                .list_for_semester(club.id, semester.id)
                .await?;

            let book_ids: Vec<Uuid> = books.iter().map(|b| b.id).collect();
            let votes = self.votes.list_for_books(&book_ids).await?;

            let tally = tally::compute_tally(&books, &votes);
            let ranked = tally::rank_books(&books, &tally);

            archives.push(SemesterArchive {
                semester,
                books: ranked,
                tally,
            });
        }

        Ok(archives)
    }
}
