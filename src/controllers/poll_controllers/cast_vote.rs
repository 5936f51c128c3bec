use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use uuid::Uuid;

use crate::controllers::poll_controllers::models::{CastVoteRequest, PollResponse};
use crate::utils::error::{AppError, AppResult};
use crate::state::AppState;

pub async fn cast_vote(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<CastVoteRequest>,
) -> AppResult<Json<PollResponse>> {
    let id = Uuid::parse_str(&poll_id)
        .map_err(|_| AppError::BadRequest("Invalid poll id".to_string()))?;

    // same visibility rule as the detail view
    let poll = state
        .store
        .find_published(id, Utc::now())
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    let is_valid_choice = poll
        .choices
        .iter()
        .any(|choice| choice.id == payload.choice_id);

    if !is_valid_choice {
        return Err(AppError::BadRequest(
            "Invalid choice id for this poll".to_string(),
        ));
    }

    let updated_poll = state
        .store
        .record_vote(id, &payload.choice_id)
        .ok_or_else(|| {
            AppError::InternalError("Failed to increment vote for choice".to_string())
        })?;

    Ok(Json(PollResponse::from(updated_poll)))
}
