//! Book entity, a recommendation submitted for a semester's vote.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A recommended book within one club/semester.
///
/// Only `title` is required; everything else is whatever the suggesting
/// member cared to fill in. Books are never mutated after creation; they
/// disappear only through cascading deletion of their semester or club.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: Uuid,
    pub club_id: Uuid,
    pub semester_id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub info_url: Option<String>,
    pub cover_url: Option<String>,
    pub suggested_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Creates a new Book instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        club_id: Uuid,
        semester_id: Uuid,
        title: String,
        author: Option<String>,
        isbn: Option<String>,
        info_url: Option<String>,
        cover_url: Option<String>,
        suggested_by: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            club_id,
            semester_id,
            title,
            author,
            isbn,
            info_url,
            cover_url,
            suggested_by,
            created_at,
        }
    }
}

/// Input data for creating a new book.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub club_id: Uuid,
    pub semester_id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub info_url: Option<String>,
    pub cover_url: Option<String>,
    pub suggested_by: Option<String>,
}

/// Book fields as entered by a member, before club/semester scoping.
///
/// The voting workflow combines a draft with the current board's club and
/// semester to build a [`NewBook`].
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub info_url: Option<String>,
    pub cover_url: Option<String>,
    pub suggested_by: Option<String>,
}

impl BookDraft {
    /// Scopes the draft to a club and semester.
    pub fn into_new_book(self, club_id: Uuid, semester_id: Uuid) -> NewBook {
        NewBook {
            club_id,
            semester_id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            info_url: self.info_url,
            cover_url: self.cover_url,
            suggested_by: self.suggested_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "The Dispossessed".to_string(),
            Some("Ursula K. Le Guin".to_string()),
            None,
            None,
            None,
            Some("mina".to_string()),
            Utc::now(),
        );

        assert_eq!(book.title, "The Dispossessed");
        assert_eq!(book.author.as_deref(), Some("Ursula K. Le Guin"));
        assert!(book.isbn.is_none());
    }

    #[test]
    fn test_draft_scoping() {
        let club_id = Uuid::new_v4();
        let semester_id = Uuid::new_v4();

        let draft = BookDraft {
            title: "Piranesi".to_string(),
            ..Default::default()
        };

        let new_book = draft.into_new_book(club_id, semester_id);

        assert_eq!(new_book.club_id, club_id);
        assert_eq!(new_book.semester_id, semester_id);
        assert_eq!(new_book.title, "Piranesi");
    }
}
