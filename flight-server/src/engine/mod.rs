//! Journey search engine.
//!
//! Two stages: a relevance filter that narrows the raw event list to the
//! events that could appear in any itinerary for the requested date, and
//! a depth-bounded exhaustive enumerator over the resulting
//! departure-airport index. The engine is pure: it performs no I/O,
//! holds no state across calls, and is total over well-formed inputs.

mod config;
mod filter;
mod search;

pub use config::SearchConfig;
pub use filter::{DepartureIndex, build_departure_index, window_start};
pub use search::find_journeys;
