//! Journey types.
//!
//! A `Journey` represents a complete itinerary from origin to destination,
//! built from one or more flight events chained end to end.

use chrono::{DateTime, Utc};

use super::{Airport, DomainError, FlightEvent};

/// A complete journey from origin to destination.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect: each leg's arrival airport is the next
///   leg's departure airport
///
/// Both are checked by [`Journey::new`]; the search engine additionally
/// guarantees them by construction, since it only ever extends a path
/// with events departing from the current frontier airport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    path: Vec<FlightEvent>,
}

impl Journey {
    /// Constructs a journey, validating the leg chain.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is empty or if any consecutive pair of
    /// legs does not share an airport.
    pub fn new(path: Vec<FlightEvent>) -> Result<Self, DomainError> {
        if path.is_empty() {
            return Err(DomainError::EmptyJourney);
        }

        for pair in path.windows(2) {
            if pair[0].to_airport != pair[1].from_airport {
                return Err(DomainError::DisconnectedLegs(
                    pair[0].to_airport,
                    pair[1].from_airport,
                ));
            }
        }

        Ok(Self { path })
    }

    /// The legs of this journey, in travel order.
    pub fn path(&self) -> &[FlightEvent] {
        &self.path
    }

    /// Number of intermediate stops: legs minus one.
    ///
    /// Derived from the path on every call, never stored, so it cannot
    /// drift from the path it describes.
    pub fn connections(&self) -> usize {
        self.path.len() - 1
    }

    /// Origin airport of the whole journey.
    pub fn origin(&self) -> Airport {
        self.path[0].from_airport
    }

    /// Final destination airport.
    pub fn destination(&self) -> Airport {
        self.path[self.path.len() - 1].to_airport
    }

    /// Departure instant of the first leg.
    pub fn departure_time(&self) -> DateTime<Utc> {
        self.path[0].departure_time
    }

    /// Arrival instant of the last leg.
    pub fn arrival_time(&self) -> DateTime<Utc> {
        self.path[self.path.len() - 1].arrival_time
    }
}
