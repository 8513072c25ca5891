use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use flight_server::feed::{FeedClient, FeedConfig};
use flight_server::settings::Settings;
use flight_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env().expect("Failed to load settings");

    let feed_config = FeedConfig::new(&settings.flight_events_api_url);
    let feed = FeedClient::new(feed_config).expect("Failed to create feed client");

    let state = AppState::new(feed, settings.search.clone());
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 8000));
    info!(
        max_connections = settings.search.max_connections,
        max_connection_wait_hours = settings.search.max_connection_wait_hours,
        max_journey_duration_hours = settings.search.max_journey_duration_hours,
        "Flight journey search listening on http://{addr}"
    );
    info!("  GET /health          - Health check");
    info!("  GET /journeys/search - Search journeys (date, from, to)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
