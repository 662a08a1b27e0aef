use std::sync::Arc;

use crate::{recommend::RecommendationClient, server};

/// Runs the JSON API server until process shutdown.
pub async fn serve(client: Arc<RecommendationClient>) {
    server::start_api_server(client).await;
}
