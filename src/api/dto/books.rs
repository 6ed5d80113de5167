//! DTOs for book suggestion and listing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{Book, NewBook};

/// Request to suggest a book for a club/semester pair.
///
/// Only the title is mandatory; the workflow trims it and rejects blanks
/// before anything reaches the store.
#[derive(Debug, Deserialize, Validate)]
pub struct AddBookRequest {
    pub club_id: Uuid,
    pub semester_id: Uuid,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub author: Option<String>,
    pub isbn: Option<String>,
    pub info_url: Option<String>,
    pub cover_url: Option<String>,
    pub suggested_by: Option<String>,
}

impl AddBookRequest {
    /// Converts the request into the store's creation type.
    pub fn into_new_book(self) -> NewBook {
        NewBook {
            club_id: self.club_id,
            semester_id: self.semester_id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            info_url: self.info_url,
            cover_url: self.cover_url,
            suggested_by: self.suggested_by,
        }
    }
}

/// A created book echoed back to the caller.
#[derive(Debug, Serialize)]
pub struct BookDto {
    pub id: Uuid,
    pub club_id: Uuid,
    pub semester_id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub info_url: Option<String>,
    pub cover_url: Option<String>,
    pub suggested_by: Option<String>,
}

impl From<Book> for BookDto {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            club_id: b.club_id,
            semester_id: b.semester_id,
            title: b.title,
            author: b.author,
            isbn: b.isbn,
            info_url: b.info_url,
            cover_url: b.cover_url,
            suggested_by: b.suggested_by,
        }
    }
}

/// A book with its current vote count, ordered for display.
#[derive(Debug, Serialize)]
pub struct RankedBookDto {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub info_url: Option<String>,
    pub cover_url: Option<String>,
    pub suggested_by: Option<String>,
    pub votes: i64,
}

impl RankedBookDto {
    /// Builds the DTO from a book and its tally count.
    pub fn with_votes(b: &Book, votes: i64) -> Self {
        Self {
            id: b.id,
            title: b.title.clone(),
            author: b.author.clone(),
            isbn: b.isbn.clone(),
            info_url: b.info_url.clone(),
            cover_url: b.cover_url.clone(),
            suggested_by: b.suggested_by.clone(),
            votes,
        }
    }
}
