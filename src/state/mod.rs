use std::sync::Arc;

use crate::store::PollStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PollStore>,
}

impl AppState {
    pub fn new(store: Arc<PollStore>) -> Self {
        Self { store }
    }
}
