//! Flight events feed.
//!
//! The feed is the one external collaborator of the search engine: it
//! retrieves the raw event list, validates it at the boundary, and
//! signals retrieval failure. The engine itself only ever sees a clean
//! `Vec<FlightEvent>`.

mod client;
mod error;
mod fixture;
mod source;
mod types;

pub use client::{FeedClient, FeedConfig};
pub use error::FeedError;
pub use fixture::FixtureSource;
pub use source::EventSource;
pub use types::RawFlightEvent;
