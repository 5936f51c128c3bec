use serde::{Serialize, Deserialize};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;


#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Poll {
    pub id: Uuid,
    pub question: String,
    pub pub_date: DateTime<Utc>,
    pub choices: Vec<Choice>,
    pub total_votes: i32
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Choice {
    pub id: String,
    pub choice_text: String,
    pub votes: u32
}

impl Poll {
    pub fn new(question: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Poll {
            id: Uuid::new_v4(),
            question: question.into(),
            pub_date,
            choices: Vec::new(),
            total_votes: 0,
        }
    }

    /// A poll is visible to readers once its publication date has passed.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    /// True when `pub_date` falls within the day ending at `now`.
    /// Both ends of the window are inclusive; future dates are never recent.
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }

    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }
}

impl Choice {
    pub fn new(choice_text: impl Into<String>) -> Self {
        Choice {
            id: Uuid::new_v4().to_string(),
            choice_text: choice_text.into(),
            votes: 0,
        }
    }
}
