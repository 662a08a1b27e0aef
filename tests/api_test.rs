//! End-to-end tests of the JSON API over a real socket, with the provider
//! left unconfigured so every response comes from the fallback catalog.

use std::{sync::Arc, time::Duration};

use moodtune::{
    provider::{CredentialManager, ProviderConfig},
    recommend::RecommendationClient,
    server,
};
use serde_json::Value;

async fn spawn_api() -> String {
    let config = ProviderConfig {
        client_id: None,
        client_secret: None,
        token_url: "http://127.0.0.1:1/api/token".to_string(),
        api_url: "http://127.0.0.1:1/v1".to_string(),
        timeout: Duration::from_secs(2),
    };
    let credentials = Arc::new(CredentialManager::new(config.clone()));
    credentials.initialize().await;

    let client = Arc::new(RecommendationClient::new(config, credentials));
    let app = server::router(client);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind api server");
    let addr = listener.local_addr().expect("api server address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("api server");
    });

    format!("http://{}", addr)
}

async fn get_json(url: &str) -> (reqwest::StatusCode, Value) {
    let response = reqwest::get(url).await.expect("request must reach server");
    let status = response.status();
    let body = response.json::<Value>().await.expect("JSON body");
    (status, body)
}

#[tokio::test]
async fn test_health_reports_fallback_mode() {
    let base = spawn_api().await;

    let (status, body) = get_json(&format!("{}/health", base)).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["provider"], "fallback");
}

#[tokio::test]
async fn test_recommendations_require_a_mood() {
    let base = spawn_api().await;

    let (status, body) = get_json(&format!("{}/api/recommendations", base)).await;

    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Mood parameter is required");
}

#[tokio::test]
async fn test_recommendations_answer_200_from_the_fallback_catalog() {
    let base = spawn_api().await;

    let (status, body) =
        get_json(&format!("{}/api/recommendations?mood=happy&limit=3", base)).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["mood"]["id"], "happy");
    assert_eq!(body["data"]["mood"]["emoji"], "😊");
    assert_eq!(body["data"]["type"], "tracks");
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(
        body["data"]["recommendations"]
            .as_array()
            .map(|a| a.len()),
        Some(3)
    );
}

#[tokio::test]
async fn test_recommendations_reject_unknown_type() {
    let base = spawn_api().await;

    let (status, _) =
        get_json(&format!("{}/api/recommendations?mood=happy&type=albums", base)).await;

    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_playlist_recommendations() {
    let base = spawn_api().await;

    let (status, body) = get_json(&format!(
        "{}/api/recommendations?mood=party&type=playlists&limit=2",
        base
    ))
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["data"]["type"], "playlists");
    assert_eq!(body["data"]["total"], 2);
}

#[tokio::test]
async fn test_search_without_query_is_a_bad_request() {
    let base = spawn_api().await;

    let (status, body) = get_json(&format!("{}/api/search", base)).await;

    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Search query is required");
}

#[tokio::test]
async fn test_search_with_bad_type_is_a_bad_request() {
    let base = spawn_api().await;

    let (status, _) = get_json(&format!("{}/api/search?q=abba&type=podcast", base)).await;

    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_without_a_provider_is_service_unavailable() {
    let base = spawn_api().await;

    let (status, body) = get_json(&format!("{}/api/search?q=abba", base)).await;

    assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Search is currently unavailable");
}

#[tokio::test]
async fn test_popular_tracks_always_answer_200() {
    let base = spawn_api().await;

    let (status, body) = get_json(&format!("{}/api/tracks/popular?limit=4", base)).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total"], 4);
}

#[tokio::test]
async fn test_playlist_tracks_without_a_provider_is_bad_gateway() {
    let base = spawn_api().await;

    let (status, body) = get_json(&format!("{}/api/playlists/pl1/tracks", base)).await;

    assert_eq!(status, reqwest::StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "Failed to fetch playlist tracks");
}
