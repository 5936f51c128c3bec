use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::models::poll_models::Choice;
use crate::controllers::poll_controllers::models::{AddChoiceRequest, PollResponse};
use crate::utils::error::{AppError, AppResult};
use crate::state::AppState;

// Authoring-side setup, so the publication date is not checked here:
// choices can be attached to a poll that has not gone live yet.
pub async fn add_choice(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<AddChoiceRequest>,
) -> AppResult<Json<PollResponse>> {
    let id = Uuid::parse_str(&poll_id)
        .map_err(|_| AppError::BadRequest("Invalid poll id".to_string()))?;

    if payload.choice_text.trim().is_empty() {
        return Err(AppError::ValidationError("Choice text must not be empty".to_string()));
    }

    let poll = state
        .store
        .add_choice(id, Choice::new(payload.choice_text.trim()))
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    Ok(Json(PollResponse::from(poll)))
}
