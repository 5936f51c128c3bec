use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::models::poll_models::{Choice, Poll};

#[derive(Deserialize, Debug)]
pub struct CreatePollRequest {
    pub question: String,
    // omitted pub_date means "published right now"
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub choices: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct PollResponse {
    pub id: String,
    pub question: String,
    pub pub_date: DateTime<Utc>,
    pub choices: Vec<Choice>,
    pub total_votes: i32,
    pub was_published_recently: bool,
}

impl From<Poll> for PollResponse {
    fn from(poll: Poll) -> Self {
        let was_published_recently = poll.was_published_recently();
        PollResponse {
            id: poll.id.to_string(),
            question: poll.question,
            pub_date: poll.pub_date,
            choices: poll.choices,
            total_votes: poll.total_votes,
            was_published_recently,
        }
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct IndexResponse {
    pub latest_polls: Vec<PollResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct AddChoiceRequest {
    pub choice_text: String,
}

#[derive(Deserialize)]
pub struct CastVoteRequest {
    pub choice_id: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ResultsResponse {
    pub id: String,
    pub question: String,
    pub choices: Vec<Choice>,
    pub total_votes: i32,
}
