//! Application state for the web layer.

use std::sync::Arc;

use crate::engine::SearchConfig;
use crate::feed::EventSource;

/// Shared application state.
///
/// Generic over the event source so the live feed client and in-memory
/// fixtures go through the same code path.
pub struct AppState<S> {
    /// Flight event source
    pub source: Arc<S>,

    /// Journey search constraints
    pub config: Arc<SearchConfig>,
}

impl<S: EventSource> AppState<S> {
    /// Create a new app state.
    pub fn new(source: S, config: SearchConfig) -> Self {
        Self {
            source: Arc::new(source),
            config: Arc::new(config),
        }
    }
}

// Manual impl: `S` itself need not be Clone behind the Arc.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            config: Arc::clone(&self.config),
        }
    }
}
