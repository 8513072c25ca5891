//! Web layer for the flight journey search service.
//!
//! Provides the HTTP endpoint for searching journeys, plus request
//! validation and error mapping. All input validation happens here; the
//! engine only ever receives well-formed values.

mod dto;
mod routes;
mod state;

pub use dto::{ErrorResponse, JourneyResult, LegResult, SearchJourneysRequest};
pub use routes::{AppError, create_router};
pub use state::AppState;
