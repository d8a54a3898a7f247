use std::sync::Arc;

use crate::assessment::interview_scoring::{KeywordResponseScorer, ResponseScorer};
use crate::assessment::session_store::SessionStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub config: Config,
    /// Pluggable interview scorer. Default: KeywordResponseScorer.
    pub response_scorer: Arc<dyn ResponseScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            sessions: SessionStore::new(),
            config,
            response_scorer: Arc::new(KeywordResponseScorer),
        }
    }
}
