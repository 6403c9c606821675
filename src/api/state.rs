use std::sync::Arc;

use crate::services::providers::CompletionProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Completion backend used for every recommendation request
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}
