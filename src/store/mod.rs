use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::poll_models::{Choice, Poll};

/// In-memory poll collection behind the query interface the handlers need.
/// Time-dependent queries take `now` as a parameter so callers control what
/// "published" means relative to their fixture data.
#[derive(Default)]
pub struct PollStore {
    polls: RwLock<Vec<Poll>>,
}

impl PollStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means a writer panicked mid-update; the poll data
    // itself is still usable, so recover the guard instead of propagating.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Poll>> {
        self.polls.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Poll>> {
        self.polls.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, poll: Poll) -> Poll {
        self.write().push(poll.clone());
        poll
    }

    pub fn find(&self, id: Uuid) -> Option<Poll> {
        self.read().iter().find(|poll| poll.id == id).cloned()
    }

    /// Lookup that hides polls whose publication date is still in the future.
    /// A future-dated poll is indistinguishable from a missing one.
    pub fn find_published(&self, id: Uuid, now: DateTime<Utc>) -> Option<Poll> {
        self.find(id).filter(|poll| poll.is_published(now))
    }

    /// Polls published at or before `now` that have at least one choice,
    /// newest first.
    pub fn latest_published(&self, now: DateTime<Utc>) -> Vec<Poll> {
        let mut latest: Vec<Poll> = self
            .read()
            .iter()
            .filter(|poll| poll.is_published(now) && !poll.choices.is_empty())
            .cloned()
            .collect();
        latest.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
        latest
    }

    pub fn add_choice(&self, id: Uuid, choice: Choice) -> Option<Poll> {
        let mut polls = self.write();
        let poll = polls.iter_mut().find(|poll| poll.id == id)?;
        poll.choices.push(choice);
        Some(poll.clone())
    }

    /// Increments the vote count of `choice_id` and the poll's running total.
    /// Returns `None` when either the poll or the choice does not exist.
    pub fn record_vote(&self, id: Uuid, choice_id: &str) -> Option<Poll> {
        let mut polls = self.write();
        let poll = polls.iter_mut().find(|poll| poll.id == id)?;
        let choice = poll.choices.iter_mut().find(|choice| choice.id == choice_id)?;
        choice.votes += 1;
        poll.total_votes += 1;
        Some(poll.clone())
    }
}
