use axum::{
    Json,
    extract::State,
};
use chrono::Utc;

use crate::controllers::poll_controllers::models::{IndexResponse, PollResponse};
use crate::utils::error::AppResult;
use crate::state::AppState;

pub async fn index(
    State(state): State<AppState>,
) -> AppResult<Json<IndexResponse>> {
    let latest_polls: Vec<PollResponse> = state
        .store
        .latest_published(Utc::now())
        .into_iter()
        .map(PollResponse::from)
        .collect();

    let message = if latest_polls.is_empty() {
        Some("No polls are available.".to_string())
    } else {
        None
    };

    Ok(Json(IndexResponse {
        latest_polls,
        message,
    }))
}
