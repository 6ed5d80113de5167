//! DTOs for session resolution.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::dto::books::RankedBookDto;
use crate::application::services::BallotBoard;
use crate::domain::entities::{Club, Semester};

/// Link parameters as they arrive in the query string.
#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    pub club: Option<String>,
    pub invite: Option<String>,
    pub semester: Option<String>,
}

/// Club fields exposed to clients.
#[derive(Debug, Serialize)]
pub struct ClubDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<&Club> for ClubDto {
    fn from(club: &Club) -> Self {
        Self {
            id: club.id,
            name: club.name.clone(),
            slug: club.slug.clone(),
        }
    }
}

/// Semester fields exposed to clients.
#[derive(Debug, Serialize)]
pub struct SemesterDto {
    pub id: Uuid,
    pub title: String,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

impl From<&Semester> for SemesterDto {
    fn from(semester: &Semester) -> Self {
        Self {
            id: semester.id,
            title: semester.title.clone(),
            start_date: semester.start_date,
            end_date: semester.end_date,
        }
    }
}

/// Everything a client needs to render one voting session.
///
/// `resolved` is false for missing or unknown links; that is a normal
/// state, delivered with 200 and empty lists, not an error. `my_votes` is
/// the ballot of the `X-Voter-Token` caller and empty when the header is
/// absent.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub resolved: bool,
    pub club: Option<ClubDto>,
    pub semester: Option<SemesterDto>,
    pub invite: Option<String>,
    pub books: Vec<RankedBookDto>,
    pub my_votes: Vec<Uuid>,
}

impl SessionResponse {
    /// Response for a link that did not resolve to a club and semester.
    pub fn unresolved(
        club: Option<&Club>,
        semester: Option<&Semester>,
        invite: Option<String>,
    ) -> Self {
        Self {
            resolved: false,
            club: club.map(Into::into),
            semester: semester.map(Into::into),
            invite,
            books: Vec::new(),
            my_votes: Vec::new(),
        }
    }

    /// Response for a loaded board: books ranked by tally, plus the
    /// caller's ballot when a voter token accompanied the request.
    pub fn from_board(board: &BallotBoard, invite: Option<String>, voter: Option<&str>) -> Self {
        let tally = board.tally();
        let books = board
            .ranked_books()
            .iter()
            .map(|b| RankedBookDto::with_votes(b, tally.get(&b.id).copied().unwrap_or(0)))
            .collect();

        let mut my_votes: Vec<Uuid> = voter
            .map(|token| board.ballot(token).into_iter().collect())
            .unwrap_or_default();
        my_votes.sort();

        Self {
            resolved: true,
            club: Some((&board.club).into()),
            semester: Some((&board.semester).into()),
            invite,
            books,
            my_votes,
        }
    }
}
