use std::sync::Arc;

use axum::{
    Extension,
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    api::{error_body, success_body},
    error::SearchError,
    recommend::RecommendationClient,
    utils,
};

/// Default result count when the caller supplies no limit, matching the
/// original API.
const DEFAULT_LIMIT: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub mood: Option<String>,
    pub limit: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<u32>,
}

pub async fn health(
    Extension(client): Extension<Arc<RecommendationClient>>,
) -> Json<Value> {
    let mode = if client.is_live() { "live" } else { "fallback" };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": mode,
    }))
}

/// `GET /api/recommendations?mood=happy&limit=20&type=tracks`
///
/// Always answers 200 with data for a valid request; a provider failure is
/// invisible here apart from the records coming from the fallback catalog.
pub async fn recommendations(
    Query(params): Query<RecommendationsQuery>,
    Extension(client): Extension<Arc<RecommendationClient>>,
) -> (StatusCode, Json<Value>) {
    let Some(mood) = params.mood.filter(|m| !m.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(error_body("Mood parameter is required")),
        );
    };

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let kind = params.kind.unwrap_or_else(|| "tracks".to_string());

    let recommendations = match kind.as_str() {
        "tracks" => {
            let tracks = client.recommend_by_mood(&mood, limit).await;
            serde_json::to_value(tracks).unwrap_or_else(|_| json!([]))
        }
        "playlists" => {
            let playlists = client.featured_playlists(limit).await;
            serde_json::to_value(playlists).unwrap_or_else(|_| json!([]))
        }
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(error_body("Type must be either \"tracks\" or \"playlists\"")),
            );
        }
    };

    let total = recommendations.as_array().map(|a| a.len()).unwrap_or(0);
    let mood_info = json!({
        "id": utils::normalize_mood_key(&mood),
        "name": utils::mood_display_name(&mood),
        "emoji": utils::mood_emoji(&mood),
        "color": utils::mood_color(&mood),
    });

    (
        StatusCode::OK,
        Json(success_body(
            &format!("{} recommendations retrieved successfully", kind),
            json!({
                "mood": mood_info,
                "type": kind,
                "recommendations": recommendations,
                "total": total,
            }),
        )),
    )
}

/// `GET /api/search?q=...&type=track,artist&limit=20`
///
/// The only endpoint where provider failures become visible: 400 for an
/// empty query, 503 when search is unavailable and the caller should offer
/// a retry.
pub async fn search(
    Query(params): Query<SearchQuery>,
    Extension(client): Extension<Arc<RecommendationClient>>,
) -> (StatusCode, Json<Value>) {
    let query = params.q.unwrap_or_default();
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    let kinds = match params.kind {
        Some(kind) => match utils::parse_search_kinds(&kind) {
            Ok(kinds) => kinds,
            Err(e) => return (StatusCode::BAD_REQUEST, Json(error_body(&e))),
        },
        None => utils::SearchKinds::default(),
    };

    match client.search(&query, &kinds, limit).await {
        Ok(results) => {
            let results = serde_json::to_value(&results).unwrap_or_else(|_| json!({}));
            let mut data = json!({ "query": query.trim() });
            if let (Some(data), Some(results)) = (data.as_object_mut(), results.as_object()) {
                for (key, value) in results {
                    data.insert(key.clone(), value.clone());
                }
            }
            (
                StatusCode::OK,
                Json(success_body("Music search completed", data)),
            )
        }
        Err(SearchError::InvalidQuery) => (
            StatusCode::BAD_REQUEST,
            Json(error_body("Search query is required")),
        ),
        Err(SearchError::Unavailable(_)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(error_body("Search is currently unavailable")),
        ),
    }
}

/// `GET /api/tracks/popular?limit=20` — never fails.
pub async fn popular_tracks(
    Query(params): Query<LimitQuery>,
    Extension(client): Extension<Arc<RecommendationClient>>,
) -> (StatusCode, Json<Value>) {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let tracks = client.popular_tracks(limit).await;
    let total = tracks.len();

    (
        StatusCode::OK,
        Json(success_body(
            "Popular tracks retrieved successfully",
            json!({
                "tracks": tracks,
                "total": total,
            }),
        )),
    )
}

/// `GET /api/playlists/{id}/tracks?limit=50`
///
/// Live-only; 502 when the provider cannot be reached, since playlist
/// contents have no local substitute.
pub async fn playlist_tracks(
    Path(playlist_id): Path<String>,
    Query(params): Query<LimitQuery>,
    Extension(client): Extension<Arc<RecommendationClient>>,
) -> (StatusCode, Json<Value>) {
    let limit = params.limit.unwrap_or(50);

    match client.playlist_tracks(&playlist_id, limit).await {
        Ok(tracks) => {
            let total = tracks.len();
            (
                StatusCode::OK,
                Json(success_body(
                    "Playlist tracks retrieved successfully",
                    json!({
                        "tracks": tracks,
                        "total": total,
                    }),
                )),
            )
        }
        Err(_) => (
            StatusCode::BAD_GATEWAY,
            Json(error_body("Failed to fetch playlist tracks")),
        ),
    }
}
