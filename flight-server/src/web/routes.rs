//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use tracing::{error, info};

use crate::domain::Airport;
use crate::engine::find_journeys;
use crate::feed::{EventSource, FeedError};

use super::dto::{ErrorResponse, JourneyResult, SearchJourneysRequest};
use super::state::AppState;

/// Create the application router.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: EventSource + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/journeys/search", get(search_journeys::<S>))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search for journeys between two airports on a given date.
///
/// `GET /journeys/search?date=YYYY-MM-DD&from=XXX&to=YYY`
///
/// Malformed parameters are rejected here with 400; the engine only ever
/// sees validated input. A feed retrieval failure maps to 500 — it must
/// stay distinguishable from a legitimate empty result.
async fn search_journeys<S: EventSource + 'static>(
    State(state): State<AppState<S>>,
    Query(req): Query<SearchJourneysRequest>,
) -> Result<Json<Vec<JourneyResult>>, AppError> {
    let date = NaiveDate::parse_from_str(&req.date, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest {
            message: format!("invalid date: {}", req.date),
        }
    })?;

    let origin = Airport::parse(&req.from).map_err(|_| AppError::BadRequest {
        message: format!("invalid origin airport: {}", req.from),
    })?;

    let destination = Airport::parse(&req.to).map_err(|_| AppError::BadRequest {
        message: format!("invalid destination airport: {}", req.to),
    })?;

    let events = state.source.list_events().await?;

    let journeys = find_journeys(&events, date, origin, destination, &state.config);

    info!(
        %origin,
        %destination,
        %date,
        events = events.len(),
        journeys = journeys.len(),
        "journey search completed"
    );

    Ok(Json(journeys.iter().map(JourneyResult::from_journey).collect()))
}

/// Application-level error, mapped onto HTTP status codes.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        AppError::Internal {
            message: format!("failed to retrieve flight events: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(status = status.as_u16(), message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
