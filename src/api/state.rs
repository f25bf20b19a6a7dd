use std::sync::Arc;

use tokio::sync::RwLock;

use crate::session::DraftSession;

/// Shared handler state. Writers hold the lock across a pick and its rescore.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<DraftSession>>,
}

impl AppState {
    pub fn new(session: DraftSession) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }
}
