//! In-memory event source for development and testing.

use crate::domain::FlightEvent;

use super::error::FeedError;
use super::source::EventSource;

/// Event source backed by a fixed in-memory list.
///
/// Useful for running the server without a live feed and for exercising
/// the search path in tests.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    events: Vec<FlightEvent>,
}

impl FixtureSource {
    /// Create a fixture source over the given events.
    pub fn new(events: Vec<FlightEvent>) -> Self {
        Self { events }
    }
}

impl EventSource for FixtureSource {
    async fn list_events(&self) -> Result<Vec<FlightEvent>, FeedError> {
        Ok(self.events.clone())
    }
}
