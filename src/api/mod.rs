//! # API Module
//!
//! HTTP endpoints served by the `moodtune serve` command. This is a thin
//! JSON layer over [`crate::recommend::RecommendationClient`]; it owns no
//! provider logic of its own.
//!
//! ## Endpoints
//!
//! - [`health`] - status and version for monitoring, including whether the
//!   service currently answers from live provider data or the fallback
//!   catalog
//! - [`recommendations`] - mood-based track or playlist recommendations;
//!   always answers 200 with data, even in fully degraded mode
//! - [`search`] - provider search; the only endpoint that surfaces provider
//!   failures (400 for an empty query, 503 when the provider is unavailable)
//! - [`popular_tracks`] - a "popular now" selection, never failing
//! - [`playlist_tracks`] - playable tracks of one provider playlist
//!
//! All responses use the `{success, message, data}` envelope.

mod music;

pub use music::{health, playlist_tracks, popular_tracks, recommendations, search};

use serde_json::{Value, json};

/// Builds the success envelope shared by all endpoints.
pub(crate) fn success_body(message: &str, data: Value) -> Value {
    json!({
        "success": true,
        "message": message,
        "data": data,
    })
}

/// Builds the error envelope shared by all endpoints.
pub(crate) fn error_body(message: &str) -> Value {
    json!({
        "success": false,
        "message": message,
    })
}
