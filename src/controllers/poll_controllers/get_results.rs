use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use uuid::Uuid;

use crate::controllers::poll_controllers::models::ResultsResponse;
use crate::utils::error::{AppError, AppResult};
use crate::state::AppState;

pub async fn get_results(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<ResultsResponse>> {
    let id = Uuid::parse_str(&poll_id)
        .map_err(|_| AppError::BadRequest("Invalid poll id".to_string()))?;

    let poll = state
        .store
        .find_published(id, Utc::now())
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    Ok(Json(ResultsResponse {
        id: poll.id.to_string(),
        question: poll.question,
        choices: poll.choices,
        total_votes: poll.total_votes,
    }))
}
