//! Handlers for the passcode-guarded admin endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::admin::{
    CreateClubRequest, CreateInviteRequest, CreateSemesterRequest, InviteResponse,
};
use crate::api::dto::session::{ClubDto, SemesterDto};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::share_link::build_share_link;

/// Creates a club.
///
/// # Endpoint
///
/// `POST /api/admin/clubs`
///
/// # Errors
///
/// - 400 for a blank name or malformed slug
/// - 409 when the slug is already taken
pub async fn create_club_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateClubRequest>,
) -> Result<(StatusCode, Json<ClubDto>), AppError> {
    payload.validate()?;

    let club = state
        .admin_service
        .create_club(&payload.name, &payload.slug)
        .await?;

    tracing::info!(slug = %club.slug, "club created");

    Ok((StatusCode::CREATED, Json((&club).into())))
}

/// Opens a semester for a club.
///
/// # Endpoint
///
/// `POST /api/admin/semesters`
///
/// # Errors
///
/// - 400 for a blank title
/// - 404 for an unknown club slug
pub async fn create_semester_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateSemesterRequest>,
) -> Result<(StatusCode, Json<SemesterDto>), AppError> {
    payload.validate()?;

    let semester = state
        .admin_service
        .create_semester(
            &payload.club_slug,
            &payload.title,
            payload.start_date,
            payload.end_date,
        )
        .await?;

    tracing::info!(club = %payload.club_slug, title = %semester.title, "semester created");

    Ok((StatusCode::CREATED, Json((&semester).into())))
}

/// Mints an invite code and its ready-to-share link.
///
/// # Endpoint
///
/// `POST /api/admin/invites`
///
/// An optional `semester_id` pins the link to one semester; otherwise the
/// link opens whatever semester is current when followed.
///
/// # Errors
///
/// - 404 for an unknown club slug
pub async fn create_invite_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateInviteRequest>,
) -> Result<(StatusCode, Json<InviteResponse>), AppError> {
    let (club, invite) = state
        .admin_service
        .create_invite(&payload.club_slug, payload.note)
        .await?;

    let share_url = build_share_link(&state.base_url, &club.slug, &invite.code, payload.semester_id)?;

    tracing::info!(club = %club.slug, code = %invite.code, "invite created");

    Ok((
        StatusCode::CREATED,
        Json(InviteResponse::new(invite, club.slug, share_url)),
    ))
}
