//! DTOs for the history endpoint.

use serde::{Deserialize, Serialize};

use crate::api::dto::books::RankedBookDto;
use crate::api::dto::session::{ClubDto, SemesterDto};
use crate::application::services::SemesterArchive;
use crate::domain::entities::Club;

/// Query for a club's retrospective.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub club: String,
}

/// One past (or current) semester with its ranked results.
#[derive(Debug, Serialize)]
pub struct SemesterArchiveDto {
    pub semester: SemesterDto,
    pub books: Vec<RankedBookDto>,
}

impl From<&SemesterArchive> for SemesterArchiveDto {
    fn from(archive: &SemesterArchive) -> Self {
        Self {
            semester: (&archive.semester).into(),
            books: archive
                .books
                .iter()
                .map(|b| {
                    RankedBookDto::with_votes(b, archive.tally.get(&b.id).copied().unwrap_or(0))
                })
                .collect(),
        }
    }
}

/// Full history response: semesters in descending start-date order, each
/// tallied independently.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub club: ClubDto,
    pub semesters: Vec<SemesterArchiveDto>,
}

impl HistoryResponse {
    /// Assembles the response from a club and its archives.
    pub fn new(club: &Club, archives: &[SemesterArchive]) -> Self {
        Self {
            club: club.into(),
            semesters: archives.iter().map(Into::into).collect(),
        }
    }
}
