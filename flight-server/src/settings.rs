//! Application settings, read from the environment.

use crate::engine::SearchConfig;

/// Errors from settings loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A required variable is absent
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    /// A variable is present but unparseable
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// URL of the upstream flight events feed
    pub flight_events_api_url: String,

    /// Journey search constraints
    pub search: SearchConfig,
}

impl Settings {
    /// Load settings from process environment variables.
    ///
    /// `FLIGHT_EVENTS_API_URL` is required. `MAX_CONNECTIONS`,
    /// `MAX_CONNECTION_WAIT_HOURS` and `MAX_JOURNEY_DURATION_HOURS`
    /// default to the standard constraint set when unset.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings via an arbitrary variable lookup (testable seam).
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let flight_events_api_url = lookup("FLIGHT_EVENTS_API_URL")
            .ok_or(SettingsError::Missing("FLIGHT_EVENTS_API_URL"))?;

        let defaults = SearchConfig::default();

        let max_connections =
            parse_or(&lookup, "MAX_CONNECTIONS", defaults.max_connections)?;
        let max_connection_wait_hours = parse_or(
            &lookup,
            "MAX_CONNECTION_WAIT_HOURS",
            defaults.max_connection_wait_hours,
        )?;
        let max_journey_duration_hours = parse_or(
            &lookup,
            "MAX_JOURNEY_DURATION_HOURS",
            defaults.max_journey_duration_hours,
        )?;

        Ok(Self {
            flight_events_api_url,
            search: SearchConfig::new(
                max_connections,
                max_connection_wait_hours,
                max_journey_duration_hours,
            ),
        })
    }
}

/// Parse an optional variable, falling back to a default when unset.
fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, SettingsError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| SettingsError::Invalid { name, value }),
    }
}
