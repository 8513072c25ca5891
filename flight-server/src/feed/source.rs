//! The event source abstraction.

use std::future::Future;

use crate::domain::FlightEvent;

use super::error::FeedError;

/// Capability to supply the full flight event list.
///
/// The search engine is written against this boundary rather than a
/// concrete HTTP client, so it can be exercised with in-memory fixtures.
/// Implementors: [`FeedClient`](super::FeedClient) over the live feed,
/// [`FixtureSource`](super::FixtureSource) over a fixed list.
pub trait EventSource: Send + Sync {
    /// Retrieve all flight events.
    ///
    /// A failed retrieval is reported as an error; callers must not
    /// conflate it with an empty list.
    fn list_events(&self) -> impl Future<Output = Result<Vec<FlightEvent>, FeedError>> + Send;
}
