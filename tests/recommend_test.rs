use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use moodtune::{
    error::{ProviderError, SearchError},
    fallback,
    provider::{CredentialManager, ProviderConfig},
    recommend::RecommendationClient,
    utils::parse_search_kinds,
};
use serde_json::{Value, json};

fn unconfigured_client() -> RecommendationClient {
    let config = ProviderConfig {
        client_id: None,
        client_secret: None,
        token_url: "http://127.0.0.1:1/api/token".to_string(),
        api_url: "http://127.0.0.1:1/v1".to_string(),
        timeout: Duration::from_secs(2),
    };

    RecommendationClient::new(config.clone(), Arc::new(CredentialManager::new(config)))
}

/// Serves the given router on an ephemeral port and returns its base URL.
async fn spawn_provider(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock provider");
    let addr = listener.local_addr().expect("mock provider address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock provider");
    });

    format!("http://{}", addr)
}

/// Builds a live client against a mock provider: the token route always
/// succeeds, the API routes come from `api`.
async fn live_client(api: Router) -> RecommendationClient {
    let app = api.route(
        "/api/token",
        post(|| async {
            Json(json!({
                "access_token": "mock-token",
                "token_type": "Bearer",
                "expires_in": 3600,
            }))
        }),
    );

    let base = spawn_provider(app).await;
    let config = ProviderConfig {
        client_id: Some("test-client".to_string()),
        client_secret: Some("test-secret".to_string()),
        token_url: format!("{}/api/token", base),
        api_url: format!("{}/v1", base),
        timeout: Duration::from_secs(2),
    };

    let credentials = Arc::new(CredentialManager::new(config.clone()));
    credentials.initialize().await;
    assert!(credentials.is_usable(), "mock token exchange must succeed");

    RecommendationClient::new(config, credentials)
}

fn mock_track(name: &str, artist: &str) -> Value {
    json!({
        "id": format!("id-{}", name),
        "name": name,
        "artists": [{ "name": artist }],
        "album": { "name": "Mock Album", "images": [{ "url": "https://img/1" }] },
        "duration_ms": 185_000,
        "preview_url": "https://preview/1",
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{}", name) }
    })
}

#[tokio::test]
async fn test_recommendations_fall_back_without_credentials() {
    let client = unconfigured_client();
    assert!(!client.is_live());

    let tracks = client.recommend_by_mood("happy", 5).await;

    assert_eq!(tracks, fallback::tracks_for("happy", 5));
    assert!(!tracks.is_empty());
}

#[tokio::test]
async fn test_featured_playlists_fall_back_without_credentials() {
    let client = unconfigured_client();

    let playlists = client.featured_playlists(3).await;

    assert_eq!(playlists, fallback::playlists(3));
    assert_eq!(playlists.len(), 3);
}

#[tokio::test]
async fn test_popular_tracks_fall_back_without_credentials() {
    let client = unconfigured_client();

    let tracks = client.popular_tracks(4).await;

    assert_eq!(tracks, fallback::tracks_for("happy", 4));
}

#[tokio::test]
async fn test_search_rejects_blank_queries() {
    let client = unconfigured_client();
    let kinds = parse_search_kinds("track").unwrap();

    assert!(matches!(
        client.search("", &kinds, 10).await,
        Err(SearchError::InvalidQuery)
    ));
    assert!(matches!(
        client.search("   ", &kinds, 10).await,
        Err(SearchError::InvalidQuery)
    ));
}

#[tokio::test]
async fn test_search_surfaces_unavailability_instead_of_falling_back() {
    let client = unconfigured_client();
    let kinds = parse_search_kinds("track").unwrap();

    assert!(matches!(
        client.search("radiohead", &kinds, 10).await,
        Err(SearchError::Unavailable(ProviderError::CredentialUnavailable))
    ));
}

#[tokio::test]
async fn test_playlist_tracks_surface_unavailability() {
    let client = unconfigured_client();

    assert!(matches!(
        client.playlist_tracks("some-playlist", 10).await,
        Err(ProviderError::CredentialUnavailable)
    ));
}

#[tokio::test]
async fn test_live_recommendations_are_normalized_in_provider_order() {
    let api = Router::new().route(
        "/v1/recommendations",
        get(|| async {
            Json(json!({
                "tracks": [
                    mock_track("First", "Alpha"),
                    mock_track("Second", "Beta"),
                ]
            }))
        }),
    );
    let client = live_client(api).await;
    assert!(client.is_live());

    let tracks = client.recommend_by_mood("energetic", 10).await;

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].name, "First");
    assert_eq!(tracks[0].artist, "Alpha");
    assert_eq!(tracks[0].duration, "3:05");
    assert_eq!(tracks[1].name, "Second");
}

#[tokio::test]
async fn test_live_recommendations_respect_limit() {
    let api = Router::new().route(
        "/v1/recommendations",
        get(|| async {
            Json(json!({
                "tracks": [
                    mock_track("One", "A"),
                    mock_track("Two", "B"),
                    mock_track("Three", "C"),
                ]
            }))
        }),
    );
    let client = live_client(api).await;

    assert_eq!(client.recommend_by_mood("chill", 2).await.len(), 2);
}

#[tokio::test]
async fn test_provider_failure_degrades_to_fallback_tracks() {
    let api = Router::new().route(
        "/v1/recommendations",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = live_client(api).await;

    let tracks = client.recommend_by_mood("sad", 5).await;

    assert_eq!(tracks, fallback::tracks_for("sad", 5));
}

#[tokio::test]
async fn test_malformed_provider_payload_degrades_to_fallback() {
    let api = Router::new().route(
        "/v1/recommendations",
        get(|| async { "not json at all" }),
    );
    let client = live_client(api).await;

    let tracks = client.recommend_by_mood("focus", 5).await;

    assert_eq!(tracks, fallback::tracks_for("focus", 5));
}

#[tokio::test]
async fn test_live_search_fills_only_requested_sections() {
    let api = Router::new().route(
        "/v1/search",
        get(|| async {
            Json(json!({
                "tracks": { "items": [mock_track("Hit", "Someone")] },
                "artists": { "items": [{ "id": "ar1", "name": "Someone" }] }
            }))
        }),
    );
    let client = live_client(api).await;

    let kinds = parse_search_kinds("track").unwrap();
    let results = client.search("someone", &kinds, 10).await.unwrap();

    assert!(results.tracks.is_some());
    assert!(results.artists.is_none(), "unrequested section must stay empty");
    assert!(results.albums.is_none());
    assert_eq!(results.tracks.unwrap()[0].name, "Hit");
}

#[tokio::test]
async fn test_live_search_with_zero_hits_is_a_valid_result() {
    let api = Router::new().route(
        "/v1/search",
        get(|| async { Json(json!({ "tracks": { "items": [] } })) }),
    );
    let client = live_client(api).await;

    let kinds = parse_search_kinds("track").unwrap();
    let results = client.search("xyzzy", &kinds, 10).await.unwrap();

    assert_eq!(results.tracks, Some(vec![]));
}

#[tokio::test]
async fn test_live_search_failure_maps_to_unavailable() {
    let api = Router::new().route(
        "/v1/search",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let client = live_client(api).await;

    let kinds = parse_search_kinds("all").unwrap();
    assert!(matches!(
        client.search("anything", &kinds, 10).await,
        Err(SearchError::Unavailable(ProviderError::Http(_)))
    ));
}

#[tokio::test]
async fn test_playlist_tracks_drop_items_without_previews() {
    let api = Router::new().route(
        "/v1/playlists/{id}/tracks",
        get(|| async {
            let mut muted = mock_track("Muted", "Quiet");
            muted["preview_url"] = Value::Null;
            Json(json!({
                "items": [
                    { "track": mock_track("Audible", "Loud") },
                    { "track": muted },
                    { "track": null }
                ]
            }))
        }),
    );
    let client = live_client(api).await;

    let tracks = client.playlist_tracks("pl1", 10).await.unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].name, "Audible");
}

#[tokio::test]
async fn test_popular_tracks_come_from_the_first_featured_playlist() {
    let api = Router::new()
        .route(
            "/v1/browse/featured-playlists",
            get(|| async {
                Json(json!({
                    "playlists": {
                        "items": [{
                            "id": "featured-1",
                            "name": "Today's Hits",
                            "tracks": { "total": 2 },
                            "owner": { "display_name": "Spotify" }
                        }]
                    }
                }))
            }),
        )
        .route(
            "/v1/playlists/{id}/tracks",
            get(|| async {
                Json(json!({
                    "items": [{ "track": mock_track("Chart Topper", "Star") }]
                }))
            }),
        );
    let client = live_client(api).await;

    let tracks = client.popular_tracks(10).await;

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].name, "Chart Topper");
}
