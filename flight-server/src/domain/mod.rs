//! Core domain types for flight journey search.

mod airport;
mod error;
mod event;
mod journey;

pub use airport::{Airport, InvalidAirport};
pub use error::DomainError;
pub use event::FlightEvent;
pub use journey::Journey;
