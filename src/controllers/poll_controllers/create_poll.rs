use axum::{
    Json,
    extract::State,
};
use chrono::Utc;

use crate::models::poll_models::{Choice, Poll};
use crate::controllers::poll_controllers::models::{CreatePollRequest, PollResponse};
use crate::utils::error::{AppError, AppResult};
use crate::state::AppState;

pub async fn create_poll(
    State(state): State<AppState>,
    Json(payload): Json<CreatePollRequest>,
) -> AppResult<Json<PollResponse>> {
    let question = payload.question.trim().to_string();
    if question.is_empty() {
        return Err(AppError::ValidationError("Poll question must not be empty".to_string()));
    }

    let trimmed_choices: Vec<String> = payload
        .choices
        .iter()
        .map(|choice| choice.trim().to_string())
        .collect();

    if trimmed_choices.iter().any(|choice| choice.is_empty()) {
        return Err(AppError::ValidationError("Choice text must not be empty".to_string()));
    }

    // choice lists may be empty (choices can be added later), but a
    // non-empty list must not repeat itself
    let mut deduped_choices = Vec::new();
    for choice in &trimmed_choices {
        if !deduped_choices.contains(choice) {
            deduped_choices.push(choice.clone());
        }
    }

    if deduped_choices.len() != trimmed_choices.len() {
        return Err(AppError::ValidationError("Poll choices must be unique".to_string()));
    }

    let pub_date = payload.pub_date.unwrap_or_else(Utc::now);

    let mut new_poll = Poll::new(question, pub_date);
    new_poll.choices = trimmed_choices.into_iter().map(Choice::new).collect();

    let poll = state.store.insert(new_poll);

    Ok(Json(PollResponse::from(poll)))
}
