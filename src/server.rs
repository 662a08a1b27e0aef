use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, error, info, recommend::RecommendationClient};

/// Builds the API router with all routes and the shared client attached.
pub fn router(client: Arc<RecommendationClient>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/recommendations", get(api::recommendations))
        .route("/api/search", get(api::search))
        .route("/api/tracks/popular", get(api::popular_tracks))
        .route("/api/playlists/{id}/tracks", get(api::playlist_tracks))
        .layer(Extension(client))
}

/// Starts the JSON API server and blocks until process shutdown.
pub async fn start_api_server(client: Arc<RecommendationClient>) {
    let app = router(client);

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Serving recommendations on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
