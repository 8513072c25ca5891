//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{FlightEvent, Journey};

/// Query parameters for journey search.
#[derive(Debug, Deserialize)]
pub struct SearchJourneysRequest {
    /// Search date, `YYYY-MM-DD`
    pub date: String,

    /// Origin airport code
    pub from: String,

    /// Destination airport code
    pub to: String,
}

/// A journey in search results.
#[derive(Debug, Serialize)]
pub struct JourneyResult {
    /// Number of intermediate stops
    pub connections: usize,

    /// Legs in travel order
    pub path: Vec<LegResult>,
}

/// A single leg of a journey.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Carrier flight number
    pub flight_number: String,

    /// Departure airport code
    pub from: String,

    /// Arrival airport code
    pub to: String,

    /// Departure time, `YYYY-MM-DD HH:MM:SS`
    pub departure_time: String,

    /// Arrival time, `YYYY-MM-DD HH:MM:SS`
    pub arrival_time: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Format a timestamp the way the API serves times.
fn format_time(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}

impl JourneyResult {
    /// Create from a domain Journey.
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            connections: journey.connections(),
            path: journey.path().iter().map(LegResult::from_event).collect(),
        }
    }
}

impl LegResult {
    /// Create from a domain FlightEvent.
    pub fn from_event(event: &FlightEvent) -> Self {
        Self {
            flight_number: event.flight_number.clone(),
            from: event.from_airport.as_str().to_string(),
            to: event.to_airport.as_str().to_string(),
            departure_time: format_time(&event.departure_time),
            arrival_time: format_time(&event.arrival_time),
        }
    }
}
