//! Wire types for the upstream flight events API.
//!
//! The feed serves a flat JSON array of events. Its field names differ
//! from the domain's (`departure_city` rather than a departure airport),
//! and its airport codes are unvalidated strings; conversion to
//! [`FlightEvent`] is where both get fixed up.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{Airport, FlightEvent};

use super::error::FeedError;

/// A flight event as the upstream feed serves it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFlightEvent {
    pub flight_number: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_datetime: DateTime<Utc>,
    pub arrival_datetime: DateTime<Utc>,
}

impl TryFrom<RawFlightEvent> for FlightEvent {
    type Error = FeedError;

    fn try_from(raw: RawFlightEvent) -> Result<Self, Self::Error> {
        let from_airport =
            Airport::parse(&raw.departure_city).map_err(|e| FeedError::InvalidEvent {
                flight_number: raw.flight_number.clone(),
                message: e.to_string(),
            })?;
        let to_airport =
            Airport::parse(&raw.arrival_city).map_err(|e| FeedError::InvalidEvent {
                flight_number: raw.flight_number.clone(),
                message: e.to_string(),
            })?;

        if raw.arrival_datetime <= raw.departure_datetime {
            return Err(FeedError::InvalidEvent {
                flight_number: raw.flight_number,
                message: "arrival is not after departure".into(),
            });
        }

        Ok(FlightEvent::new(
            raw.flight_number,
            from_airport,
            to_airport,
            raw.departure_datetime,
            raw.arrival_datetime,
        ))
    }
}
