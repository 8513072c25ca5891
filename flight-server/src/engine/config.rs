//! Search configuration for the journey engine.

use chrono::Duration;

/// Constraint parameters for journey search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of intermediate stops allowed (inclusive).
    /// A journey with `max_connections` connections is still accepted.
    pub max_connections: usize,

    /// Maximum gap between one leg's arrival and the next leg's
    /// departure (hours).
    pub max_connection_wait_hours: i64,

    /// Maximum span, from the start of the search date, within which a
    /// journey's final arrival must fall (hours).
    pub max_journey_duration_hours: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_connections: usize,
        max_connection_wait_hours: i64,
        max_journey_duration_hours: i64,
    ) -> Self {
        Self {
            max_connections,
            max_connection_wait_hours,
            max_journey_duration_hours,
        }
    }

    /// Returns the maximum connection wait as a Duration.
    pub fn max_connection_wait(&self) -> Duration {
        Duration::hours(self.max_connection_wait_hours)
    }

    /// Returns the maximum journey duration as a Duration.
    pub fn max_journey_duration(&self) -> Duration {
        Duration::hours(self.max_journey_duration_hours)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_connections: 1,
            max_connection_wait_hours: 4,
            max_journey_duration_hours: 24, // a full day from midnight
        }
    }
}
