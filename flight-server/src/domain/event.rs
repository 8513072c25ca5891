//! Flight event types.

use chrono::{DateTime, Utc};

use super::Airport;

/// A single scheduled flight leg between two airports.
///
/// Events are produced by the event feed, passed into the search engine
/// for the duration of one call, and never mutated. The engine treats
/// `flight_number` as opaque and assumes `arrival_time > departure_time`;
/// both are enforced upstream, at the feed boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightEvent {
    /// Carrier flight number, e.g. "IB1234". Not interpreted.
    pub flight_number: String,

    /// Departure airport.
    pub from_airport: Airport,

    /// Arrival airport.
    pub to_airport: Airport,

    /// Scheduled departure instant.
    pub departure_time: DateTime<Utc>,

    /// Scheduled arrival instant.
    pub arrival_time: DateTime<Utc>,
}

impl FlightEvent {
    /// Create a new flight event.
    pub fn new(
        flight_number: impl Into<String>,
        from_airport: Airport,
        to_airport: Airport,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            from_airport,
            to_airport,
            departure_time,
            arrival_time,
        }
    }
}
