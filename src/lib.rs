pub mod controllers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

use axum::Router;
use axum::routing::get;
use controllers::poll_controllers::index;
use state::AppState;

pub fn app(state: AppState) -> Router {
    // `nest` matches only the bare prefix for the inner "/" route, so the
    // trailing-slash form of the listing path needs its own route.
    Router::new()
        .route("/api/polls/", get(index::index))
        .nest("/api/polls", routes::poll_routes::poll_routes())
        .with_state(state)
}
