pub mod models;
pub mod index;
pub mod get_poll;
pub mod create_poll;
pub mod add_choice;
pub mod cast_vote;
pub mod get_results;
