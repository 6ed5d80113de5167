//! Book suggestion and vote toggling.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Book, BookDraft, Club, NewBook, NewVote, Semester, Vote};
use crate::domain::repositories::{BookRepository, VoteRepository};
use crate::domain::tally;
use crate::error::AppError;
use serde_json::json;

/// The loaded state of one voting session: a club, a semester, its books,
/// and every vote referencing them.
///
/// The board is an owned value. Workflow operations borrow the current board
/// and return a fresh one on success, so a failed call leaves the caller's
/// state exactly as it was; there is no shared mutable cache to corrupt.
/// A board can still drift from the store while it sits in a client's hands;
/// the store's uniqueness constraint, not the board, arbitrates duplicate
/// votes, and [`VotingService::refresh_votes`] reconciles after a conflict.
#[derive(Debug, Clone)]
pub struct BallotBoard {
    pub club: Club,
    pub semester: Semester,
    pub books: Vec<Book>,
    pub votes: Vec<Vote>,
}

impl BallotBoard {
    /// Vote counts per book, zero-filled for books nobody voted on.
    pub fn tally(&self) -> HashMap<Uuid, i64> {
        tally::compute_tally(&self.books, &self.votes)
    }

    /// The set of books the given voter currently has a vote on.
    pub fn ballot(&self, voter_token: &str) -> HashSet<Uuid> {
        tally::compute_ballot(&self.votes, voter_token)
    }

    /// Books ordered by descending vote count, ties in submission order.
    pub fn ranked_books(&self) -> Vec<Book> {
        tally::rank_books(&self.books, &self.tally())
    }
}

/// Result of a store-authoritative toggle.
#[derive(Debug, Clone, Copy)]
pub struct ToggleOutcome {
    /// Whether the voter holds a vote on the book after the toggle.
    pub voted: bool,
    /// The book's vote count after the toggle.
    pub votes: i64,
}

/// Service orchestrating add-book and toggle-vote operations.
///
/// Each voter's relationship to each book is a two-state toggle:
/// unvoted → voted → unvoted. Nothing here retries or serializes;
/// concurrent toggles from the same voter may race, and the losing insert
/// surfaces the store's [`AppError::Conflict`] untouched.
pub struct VotingService<B: BookRepository, V: VoteRepository> {
    books: Arc<B>,
    votes: Arc<V>,
}

impl<B: BookRepository, V: VoteRepository> VotingService<B, V> {
    /// Creates a new voting service.
    pub fn new(books: Arc<B>, votes: Arc<V>) -> Self {
        Self { books, votes }
    }

    /// Loads the full board for a resolved club/semester pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn load_board(
        &self,
        club: Club,
        semester: Semester,
    ) -> Result<BallotBoard, AppError> {
        let books = self
            .books
            .list_for_semester(club.id, semester.id)
            .await?;

        let book_ids: Vec<Uuid> = books.iter().map(|b| b.id).collect();
        let votes = self.votes.list_for_books(&book_ids).await?;

        Ok(BallotBoard {
            club,
            semester,
            books,
            votes,
        })
    }

    /// Validates and inserts a book suggestion.
    ///
    /// The title is trimmed and must be non-empty; other fields are trimmed
    /// with blanks collapsed to `None`. Validation happens before any store
    /// call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank title.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn suggest(&self, new_book: NewBook) -> Result<Book, AppError> {
        let title = new_book.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::bad_request("Title is required", json!({})));
        }

        let cleaned = NewBook {
            club_id: new_book.club_id,
            semester_id: new_book.semester_id,
            title,
            author: clean(new_book.author),
            isbn: clean(new_book.isbn),
            info_url: clean(new_book.info_url),
            cover_url: clean(new_book.cover_url),
            suggested_by: clean(new_book.suggested_by),
        };

        self.books.create(cleaned).await
    }

    /// Adds a book to the board's semester and returns the grown board.
    ///
    /// # Errors
    ///
    /// See [`Self::suggest`]; on error the caller's board is untouched.
    pub async fn add_book(
        &self,
        board: &BallotBoard,
        draft: BookDraft,
    ) -> Result<BallotBoard, AppError> {
        let book = self
            .suggest(draft.into_new_book(board.club.id, board.semester.id))
            .await?;

        let mut next = board.clone();
        next.books.push(book);
        Ok(next)
    }

    /// Toggles the voter's vote on a book, judging by the board's loaded
    /// votes.
    ///
    /// - no vote on the board ⇒ cast one; a racing duplicate surfaces the
    ///   store's [`AppError::Conflict`] with no retry and no board change
    /// - a vote on the board ⇒ delete that row by id; a row the store
    ///   already lost is treated as retracted rather than an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the insert loses a race, and
    /// [`AppError::Internal`] on database errors. Either way the caller's
    /// board is untouched; [`Self::refresh_votes`] re-syncs the affected
    /// book afterwards.
    pub async fn toggle_vote(
        &self,
        board: &BallotBoard,
        book_id: Uuid,
        voter_token: &str,
    ) -> Result<BallotBoard, AppError> {
        let mine = board
            .votes
            .iter()
            .find(|v| v.book_id == book_id && v.voter_token == voter_token);

        let mut next = board.clone();

        match mine {
            Some(vote) => {
                let vote_id = vote.id;
                self.votes.delete(vote_id).await?;
                next.votes.retain(|v| v.id != vote_id);
            }
            None => {
                let created = self
                    .votes
                    .create(NewVote {
                        book_id,
                        voter_token: voter_token.to_string(),
                    })
                    .await?;
                next.votes.push(created);
            }
        }

        Ok(next)
    }

    /// Replaces the board's votes for one book with the store's view.
    ///
    /// This is the reconciliation step after a conflict or transport
    /// failure: the optimistic local state for the affected book is thrown
    /// away in favor of a refetch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn refresh_votes(
        &self,
        board: &BallotBoard,
        book_id: Uuid,
    ) -> Result<BallotBoard, AppError> {
        let fresh = self.votes.list_for_book(book_id).await?;

        let mut next = board.clone();
        next.votes.retain(|v| v.book_id != book_id);
        next.votes.extend(fresh);
        Ok(next)
    }

    /// Toggles a vote judging by the store's current rows instead of a
    /// client-held board.
    ///
    /// Used by the stateless HTTP handler: fetch the book and its votes,
    /// then cast or retract, returning the post-toggle count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown book id,
    /// [`AppError::Conflict`] when a concurrent duplicate wins the race,
    /// and [`AppError::Internal`] on database errors.
    pub async fn toggle(
        &self,
        book_id: Uuid,
        voter_token: &str,
    ) -> Result<ToggleOutcome, AppError> {
        let book = self
            .books
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found", json!({ "book_id": book_id })))?;

        let current = self.votes.list_for_book(book.id).await?;
        let count = current.len() as i64;

        match current.iter().find(|v| v.voter_token == voter_token) {
            Some(vote) => {
                // A row another client already removed still counts as
                // retracted; the count clamp covers that drift.
                self.votes.delete(vote.id).await?;
                Ok(ToggleOutcome {
                    voted: false,
                    votes: (count - 1).max(0),
                })
            }
            None => {
                self.votes
                    .create(NewVote {
                        book_id: book.id,
                        voter_token: voter_token.to_string(),
                    })
                    .await?;
                Ok(ToggleOutcome {
                    voted: true,
                    votes: count + 1,
                })
            }
        }
    }
}

fn clean(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockBookRepository, MockVoteRepository};
    use chrono::Utc;

    fn test_club() -> Club {
        Club::new(
            Uuid::new_v4(),
            "Wednesday Humanities".to_string(),
            "wed-club".to_string(),
            Utc::now(),
        )
    }

    fn test_semester(club_id: Uuid) -> Semester {
        Semester::new(
            Uuid::new_v4(),
            club_id,
            "2025 Fall".to_string(),
            None,
            None,
            Utc::now(),
        )
    }

    fn test_book(club_id: Uuid, semester_id: Uuid, title: &str) -> Book {
        Book::new(
            Uuid::new_v4(),
            club_id,
            semester_id,
            title.to_string(),
            None,
            None,
            None,
            None,
            None,
            Utc::now(),
        )
    }

    fn empty_board() -> BallotBoard {
        let club = test_club();
        let semester = test_semester(club.id);
        BallotBoard {
            club,
            semester,
            books: vec![],
            votes: vec![],
        }
    }

    fn board_with_book(title: &str) -> BallotBoard {
        let mut board = empty_board();
        board
            .books
            .push(test_book(board.club.id, board.semester.id, title));
        board
    }

    fn echo_vote(nv: &NewVote) -> Vote {
        Vote::new(
            Uuid::new_v4(),
            nv.book_id,
            nv.voter_token.clone(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_add_book_rejects_blank_title_before_store() {
        // No expectations set: a store call would panic the mocks.
        let service = VotingService::new(
            Arc::new(MockBookRepository::new()),
            Arc::new(MockVoteRepository::new()),
        );

        let board = empty_board();
        let draft = BookDraft {
            title: "   ".to_string(),
            ..Default::default()
        };

        let result = service.add_book(&board, draft).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
        assert!(board.books.is_empty());
    }

    #[tokio::test]
    async fn test_add_book_appends_to_board() {
        let mut books = MockBookRepository::new();
        books.expect_create().times(1).returning(|nb| {
            Ok(Book::new(
                Uuid::new_v4(),
                nb.club_id,
                nb.semester_id,
                nb.title,
                nb.author,
                nb.isbn,
                nb.info_url,
                nb.cover_url,
                nb.suggested_by,
                Utc::now(),
            ))
        });

        let service = VotingService::new(Arc::new(books), Arc::new(MockVoteRepository::new()));

        let board = empty_board();
        let draft = BookDraft {
            title: "  Piranesi  ".to_string(),
            author: Some("  ".to_string()),
            suggested_by: Some(" mina ".to_string()),
            ..Default::default()
        };

        let next = service.add_book(&board, draft).await.unwrap();

        assert_eq!(next.books.len(), 1);
        assert_eq!(next.books[0].title, "Piranesi");
        assert!(next.books[0].author.is_none());
        assert_eq!(next.books[0].suggested_by.as_deref(), Some("mina"));
        // The input board is a value the caller still owns, unchanged.
        assert!(board.books.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_vote_round_trip() {
        let board = board_with_book("Book A");
        let book_id = board.books[0].id;

        let mut votes = MockVoteRepository::new();
        votes
            .expect_create()
            .times(1)
            .returning(|nv| Ok(echo_vote(&nv)));
        votes.expect_delete().times(1).returning(|_| Ok(true));

        let service = VotingService::new(Arc::new(MockBookRepository::new()), Arc::new(votes));

        let voted = service.toggle_vote(&board, book_id, "voter-x").await.unwrap();
        assert!(voted.ballot("voter-x").contains(&book_id));
        assert_eq!(voted.tally()[&book_id], 1);

        let unvoted = service.toggle_vote(&voted, book_id, "voter-x").await.unwrap();
        assert!(unvoted.ballot("voter-x").is_empty());
        assert_eq!(unvoted.tally()[&book_id], 0);
        assert_eq!(unvoted.votes.len(), board.votes.len());
    }

    #[tokio::test]
    async fn test_toggle_vote_surfaces_conflict_unchanged() {
        let board = board_with_book("Book A");
        let book_id = board.books[0].id;

        let mut votes = MockVoteRepository::new();
        votes.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                serde_json::json!({}),
            ))
        });

        let service = VotingService::new(Arc::new(MockBookRepository::new()), Arc::new(votes));

        let result = service.toggle_vote(&board, book_id, "voter-x").await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
        assert!(board.votes.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_vote_keeps_other_voters() {
        let mut board = board_with_book("Book A");
        let book_id = board.books[0].id;
        board.votes.push(Vote::new(
            Uuid::new_v4(),
            book_id,
            "voter-y".to_string(),
            Utc::now(),
        ));
        let mine = Vote::new(Uuid::new_v4(), book_id, "voter-x".to_string(), Utc::now());
        let mine_id = mine.id;
        board.votes.push(mine);

        let mut votes = MockVoteRepository::new();
        votes
            .expect_delete()
            .withf(move |id| *id == mine_id)
            .times(1)
            .returning(|_| Ok(true));

        let service = VotingService::new(Arc::new(MockBookRepository::new()), Arc::new(votes));

        let next = service.toggle_vote(&board, book_id, "voter-x").await.unwrap();

        assert_eq!(next.tally()[&book_id], 1);
        assert!(next.ballot("voter-x").is_empty());
        assert!(next.ballot("voter-y").contains(&book_id));
    }

    #[tokio::test]
    async fn test_refresh_votes_replaces_one_book() {
        let mut board = board_with_book("Book A");
        let book_id = board.books[0].id;
        let other = test_book(board.club.id, board.semester.id, "Book B");
        let other_id = other.id;
        board.books.push(other);
        // Optimistic leftover the store no longer has.
        board.votes.push(Vote::new(
            Uuid::new_v4(),
            book_id,
            "voter-x".to_string(),
            Utc::now(),
        ));
        board.votes.push(Vote::new(
            Uuid::new_v4(),
            other_id,
            "voter-y".to_string(),
            Utc::now(),
        ));

        let mut votes = MockVoteRepository::new();
        votes
            .expect_list_for_book()
            .withf(move |id| *id == book_id)
            .times(1)
            .returning(move |id| {
                Ok(vec![Vote::new(
                    Uuid::new_v4(),
                    id,
                    "voter-z".to_string(),
                    Utc::now(),
                )])
            });

        let service = VotingService::new(Arc::new(MockBookRepository::new()), Arc::new(votes));

        let next = service.refresh_votes(&board, book_id).await.unwrap();

        assert_eq!(next.tally()[&book_id], 1);
        assert!(next.ballot("voter-z").contains(&book_id));
        assert!(next.ballot("voter-x").is_empty());
        // The other book's votes are untouched.
        assert!(next.ballot("voter-y").contains(&other_id));
    }

    #[tokio::test]
    async fn test_store_toggle_casts_and_counts() {
        let book = test_book(Uuid::new_v4(), Uuid::new_v4(), "Book A");
        let book_id = book.id;

        let mut books = MockBookRepository::new();
        books
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(book.clone())));

        let mut votes = MockVoteRepository::new();
        votes
            .expect_list_for_book()
            .times(1)
            .returning(|_| Ok(vec![]));
        votes
            .expect_create()
            .times(1)
            .returning(|nv| Ok(echo_vote(&nv)));

        let service = VotingService::new(Arc::new(books), Arc::new(votes));

        let outcome = service.toggle(book_id, "voter-x").await.unwrap();

        assert!(outcome.voted);
        assert_eq!(outcome.votes, 1);
    }

    #[tokio::test]
    async fn test_store_toggle_retracts() {
        let book = test_book(Uuid::new_v4(), Uuid::new_v4(), "Book A");
        let book_id = book.id;

        let mut books = MockBookRepository::new();
        books
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(book.clone())));

        let mut votes = MockVoteRepository::new();
        votes.expect_list_for_book().times(1).returning(move |id| {
            Ok(vec![
                Vote::new(Uuid::new_v4(), id, "voter-x".to_string(), Utc::now()),
                Vote::new(Uuid::new_v4(), id, "voter-y".to_string(), Utc::now()),
            ])
        });
        votes.expect_delete().times(1).returning(|_| Ok(true));

        let service = VotingService::new(Arc::new(books), Arc::new(votes));

        let outcome = service.toggle(book_id, "voter-x").await.unwrap();

        assert!(!outcome.voted);
        assert_eq!(outcome.votes, 1);
    }

    #[tokio::test]
    async fn test_store_toggle_unknown_book() {
        let mut books = MockBookRepository::new();
        books.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = VotingService::new(Arc::new(books), Arc::new(MockVoteRepository::new()));

        let result = service.toggle(Uuid::new_v4(), "voter-x").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
