//! Raw provider HTTP calls.
//!
//! Thin, stateless wrapper over the provider's REST endpoints. Every request
//! carries the caller-supplied bearer token and is subject to the bounded
//! timeout from [`ProviderConfig::timeout`]; failures are classified into
//! [`ProviderError`] and left for the orchestration layer to absorb or
//! surface. Payloads come back in raw provider shape — normalization happens
//! in [`super::normalize`].

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    error::ProviderError,
    provider::ProviderConfig,
    types::{
        FeaturedPlaylistsResponse, MoodParameters, PlaylistTracksResponse,
        RecommendationsResponse, SearchResponse,
    },
    utils::SearchKinds,
};

pub struct ProviderClient {
    config: ProviderConfig,
    http: Client,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> Self {
        // A client without the bounded timeout must never be constructed
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build HTTP client");

        Self { config, http }
    }

    /// `GET /recommendations` with mood-derived audio-feature targets and
    /// seed genres. The provider may return fewer than `limit` tracks; that
    /// is a valid result, never an error.
    pub async fn get_recommendations(
        &self,
        token: &str,
        params: &MoodParameters,
        limit: u32,
    ) -> Result<RecommendationsResponse, ProviderError> {
        let mut query = params.to_query();
        query.push(("limit", limit.to_string()));

        self.get_json(&format!("{}/recommendations", self.config.api_url), token, &query)
            .await
    }

    /// `GET /search` across the requested entity kinds.
    pub async fn search(
        &self,
        token: &str,
        query: &str,
        kinds: &SearchKinds,
        limit: u32,
    ) -> Result<SearchResponse, ProviderError> {
        let query = [
            ("q", query.to_string()),
            ("type", kinds.to_string()),
            ("limit", limit.to_string()),
        ];

        self.get_json(&format!("{}/search", self.config.api_url), token, &query)
            .await
    }

    /// `GET /browse/featured-playlists`.
    pub async fn get_featured_playlists(
        &self,
        token: &str,
        limit: u32,
    ) -> Result<FeaturedPlaylistsResponse, ProviderError> {
        let query = [("limit", limit.to_string())];

        self.get_json(
            &format!("{}/browse/featured-playlists", self.config.api_url),
            token,
            &query,
        )
        .await
    }

    /// `GET /playlists/{id}/tracks`.
    pub async fn get_playlist_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        limit: u32,
    ) -> Result<PlaylistTracksResponse, ProviderError> {
        let query = [("limit", limit.to_string())];

        self.get_json(
            &format!("{}/playlists/{}/tracks", self.config.api_url, playlist_id),
            token,
            &query,
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(ProviderError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http(status));
        }

        response.json::<T>().await.map_err(ProviderError::from)
    }
}
