use axum::{Router, routing::{get, post}};
use crate::controllers::poll_controllers::{create_poll, get_poll, add_choice, cast_vote, get_results, index};
use crate::state::AppState;


pub fn poll_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_poll::create_poll))
        .route("/:poll_id", get(get_poll::get_poll))
        .route("/:poll_id/choice", post(add_choice::add_choice))
        .route("/:poll_id/vote", post(cast_vote::cast_vote))
        .route("/:poll_id/results", get(get_results::get_results))
        .route("/", get(index::index))
}
