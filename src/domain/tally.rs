//! Pure vote tallying over in-memory books and votes.
//!
//! No I/O here: the voting workflow and the history aggregator both feed
//! loaded rows through these functions, so counting behaves identically for
//! the live session and the retrospective view.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::domain::entities::{Book, Vote};

/// Counts votes per book.
///
/// Every book appears in the result, with 0 when nothing references it.
/// Votes pointing at a book outside `books` are ignored, so the sum of all
/// counts always equals the number of votes that reference a known book.
pub fn compute_tally(books: &[Book], votes: &[Vote]) -> HashMap<Uuid, i64> {
    let mut tally: HashMap<Uuid, i64> = books.iter().map(|b| (b.id, 0)).collect();

    for vote in votes {
        if let Some(count) = tally.get_mut(&vote.book_id) {
            *count += 1;
        }
    }

    tally
}

/// The set of books a voter token currently has an active vote on.
pub fn compute_ballot(votes: &[Vote], voter_token: &str) -> HashSet<Uuid> {
    votes
        .iter()
        .filter(|v| v.voter_token == voter_token)
        .map(|v| v.book_id)
        .collect()
}

/// Orders books by descending vote count for display.
///
/// The sort is stable: books with equal counts keep their incoming
/// (submission) order.
pub fn rank_books(books: &[Book], tally: &HashMap<Uuid, i64>) -> Vec<Book> {
    let mut ranked = books.to_vec();
    ranked.sort_by_key(|b| std::cmp::Reverse(tally.get(&b.id).copied().unwrap_or(0)));
    ranked
}
