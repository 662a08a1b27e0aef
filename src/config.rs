//! Configuration management for the moodtune service.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, API
//! endpoint overrides, request timeouts, and server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults
//!
//! Missing provider credentials are deliberately not an error: the service
//! boots into permanent fallback mode and answers every recommendation
//! request from the local catalog.

use std::{env, path::PathBuf, time::Duration};

use crate::provider::ProviderConfig;

/// Default Spotify token exchange endpoint (client-credentials grant).
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Default Spotify Web API base URL.
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default bounded timeout for any single provider request, in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for `moodtune/.env` under the platform-specific local data directory
/// (see `build.rs` for the per-platform locations) and loads it if present.
/// A missing or unreadable file is silently ignored: the service must be able
/// to start with zero configuration and run in fallback mode.
pub async fn load_env() {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodtune/.env");
    if let Some(parent) = path.parent() {
        let _ = async_fs::create_dir_all(parent).await;
    }

    let _ = dotenv::from_path(path);
}

/// Returns the Spotify API client ID, if configured.
///
/// Reads the `SPOTIFY_CLIENT_ID` environment variable. Empty values are
/// treated as absent so that `SPOTIFY_CLIENT_ID=` in a `.env` template does
/// not count as a configured credential.
pub fn provider_client_id() -> Option<String> {
    env::var("SPOTIFY_CLIENT_ID").ok().filter(|v| !v.is_empty())
}

/// Returns the Spotify API client secret, if configured.
///
/// Reads the `SPOTIFY_CLIENT_SECRET` environment variable. The secret is
/// never logged anywhere in the application.
pub fn provider_client_secret() -> Option<String> {
    env::var("SPOTIFY_CLIENT_SECRET")
        .ok()
        .filter(|v| !v.is_empty())
}

/// Returns the token exchange URL, with the real Spotify endpoint as default.
///
/// The `SPOTIFY_TOKEN_URL` override exists for integration tests, which point
/// it at an in-process mock server.
pub fn provider_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the Web API base URL, with the real Spotify endpoint as default.
pub fn provider_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the bounded timeout applied to every provider request.
///
/// Reads `PROVIDER_TIMEOUT_SECS`; invalid or missing values fall back to the
/// 10 second default. A request exceeding this timeout is treated exactly
/// like any other provider failure.
pub fn request_timeout() -> Duration {
    let secs = env::var("PROVIDER_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Returns the bind address for the HTTP API server (`serve` command).
///
/// Reads `SERVER_ADDRESS`, defaulting to `127.0.0.1:8080`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

/// Returns the path of the optional mood table override resource.
///
/// The mood-to-parameter table is product-tunable data, not logic. Operators
/// can replace individual entries by dropping a JSON document at
/// `moodtune/moods.json` in the local data directory; see
/// [`crate::moods::MoodParameterMap::load`].
pub fn mood_table_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodtune/moods.json");
    path
}

/// Assembles the full provider configuration from the environment.
///
/// The returned value is an immutable snapshot; changing environment
/// variables afterwards has no effect on already-constructed components.
pub fn provider_config() -> ProviderConfig {
    ProviderConfig {
        client_id: provider_client_id(),
        client_secret: provider_client_secret(),
        token_url: provider_token_url(),
        api_url: provider_api_url(),
        timeout: request_timeout(),
    }
}
