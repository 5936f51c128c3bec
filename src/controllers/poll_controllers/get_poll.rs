use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use uuid::Uuid;

use crate::controllers::poll_controllers::models::PollResponse;
use crate::utils::error::{AppError, AppResult};
use crate::state::AppState;

pub async fn get_poll(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<PollResponse>> {
    let id = Uuid::parse_str(&poll_id)
        .map_err(|_| AppError::BadRequest("Invalid poll id".to_string()))?;

    // future-dated polls 404 exactly like missing ones
    let poll = state
        .store
        .find_published(id, Utc::now())
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    Ok(Json(PollResponse::from(poll)))
}
