//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from feed/IO errors.

use super::Airport;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Journey has no legs
    #[error("journey must have at least one leg")]
    EmptyJourney,

    /// Consecutive legs don't connect
    #[error("legs do not connect: arrival at {0} followed by departure from {1}")]
    DisconnectedLegs(Airport, Airport),
}
