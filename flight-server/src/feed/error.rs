//! Event feed error types.

/// Errors from the flight event feed.
///
/// Retrieval failure is the one failure kind the wider system has: it is
/// raised here, never inside the search engine, and the web layer must
/// surface it as a server-side failure distinct from "no journeys found".
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned an error status code
    #[error("feed returned status {status}")]
    Status { status: u16 },

    /// Feed body was not the expected JSON event list
    #[error("feed body decode failed: {message}")]
    Decode { message: String },

    /// An event in the feed failed validation
    #[error("invalid event {flight_number}: {message}")]
    InvalidEvent {
        flight_number: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedError::Status { status: 503 };
        assert_eq!(err.to_string(), "feed returned status 503");

        let err = FeedError::Decode {
            message: "expected array".into(),
        };
        assert_eq!(err.to_string(), "feed body decode failed: expected array");

        let err = FeedError::InvalidEvent {
            flight_number: "IB1234".into(),
            message: "invalid airport code: must be exactly 3 characters".into(),
        };
        assert!(err.to_string().contains("IB1234"));
        assert!(err.to_string().contains("airport code"));
    }
}
