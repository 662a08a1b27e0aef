//! Recommendation orchestration.
//!
//! [`RecommendationClient`] decides per request whether to call the live
//! provider or serve the fallback catalog, and guarantees bounded latency
//! through the provider client's request timeout.
//!
//! Two propagation policies coexist by design:
//!
//! - `recommend_by_mood` and `featured_playlists` never fail. An unusable
//!   credential or any provider failure (timeout, non-2xx, malformed
//!   payload, network error) yields fallback data; the failure is logged
//!   with operation, mood/limit, and cause, and never re-thrown.
//! - `search` and `playlist_tracks` surface failures, because no safe
//!   synthetic substitute exists for an open-ended query and the caller
//!   must distinguish "no results" from "service unavailable".

use std::sync::Arc;

use crate::{
    error::{ProviderError, SearchError},
    fallback,
    moods::MoodParameterMap,
    provider::{CredentialManager, ProviderClient, ProviderConfig, normalize},
    types::{CanonicalPlaylist, CanonicalTrack, SearchResults},
    utils::{SearchKind, SearchKinds},
    warning,
};

pub struct RecommendationClient {
    credentials: Arc<CredentialManager>,
    provider: ProviderClient,
    moods: MoodParameterMap,
}

impl RecommendationClient {
    /// Builds a client with the built-in mood table.
    pub fn new(config: ProviderConfig, credentials: Arc<CredentialManager>) -> Self {
        Self::with_moods(config, credentials, MoodParameterMap::builtin())
    }

    /// Builds a client with a caller-supplied (e.g. override-merged) table.
    pub fn with_moods(
        config: ProviderConfig,
        credentials: Arc<CredentialManager>,
        moods: MoodParameterMap,
    ) -> Self {
        Self {
            credentials,
            provider: ProviderClient::new(config),
            moods,
        }
    }

    pub fn moods(&self) -> &MoodParameterMap {
        &self.moods
    }

    /// True while live provider data is being served; false in fallback mode.
    pub fn is_live(&self) -> bool {
        self.credentials.is_usable()
    }

    /// Recommends at most `limit` tracks for a mood. Never fails.
    ///
    /// Without a usable credential the fallback catalog answers immediately —
    /// a designed degraded mode, not an error path. On a live call the
    /// provider-returned order is preserved and no re-ranking happens; the
    /// provider returning fewer than `limit` tracks is a valid result.
    pub async fn recommend_by_mood(&self, mood: &str, limit: u32) -> Vec<CanonicalTrack> {
        let token = match self.credentials.current_token() {
            Ok(token) => token,
            Err(_) => return fallback::tracks_for(mood, limit),
        };

        let params = self.moods.parameters_for(mood);
        match self.provider.get_recommendations(&token, params, limit).await {
            Ok(response) => response
                .tracks
                .iter()
                .take(limit as usize)
                .map(normalize::track)
                .collect(),
            Err(e) => {
                warning!(
                    "Recommendation request failed (mood={}, limit={}): {}. Serving fallback tracks.",
                    mood,
                    limit,
                    e
                );
                fallback::tracks_for(mood, limit)
            }
        }
    }

    /// Returns at most `limit` featured playlists. Never fails; degrades to
    /// the fallback playlist list under the same policy as
    /// [`Self::recommend_by_mood`].
    pub async fn featured_playlists(&self, limit: u32) -> Vec<CanonicalPlaylist> {
        let token = match self.credentials.current_token() {
            Ok(token) => token,
            Err(_) => return fallback::playlists(limit),
        };

        match self.provider.get_featured_playlists(&token, limit).await {
            Ok(response) => response
                .playlists
                .items
                .iter()
                .take(limit as usize)
                .map(normalize::playlist)
                .collect(),
            Err(e) => {
                warning!(
                    "Featured playlists request failed (limit={}): {}. Serving fallback playlists.",
                    limit,
                    e
                );
                fallback::playlists(limit)
            }
        }
    }

    /// Searches the provider for tracks, artists and/or albums.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidQuery`] for an empty or whitespace query
    /// - [`SearchError::Unavailable`] when no credential is usable or the
    ///   provider fails; there is no fallback dataset for open-ended search
    ///
    /// A live provider returning zero items yields empty sections, which is
    /// a valid non-error response.
    pub async fn search(
        &self,
        query: &str,
        kinds: &SearchKinds,
        limit: u32,
    ) -> Result<SearchResults, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidQuery);
        }

        let token = self
            .credentials
            .current_token()
            .map_err(SearchError::Unavailable)?;

        let response = self
            .provider
            .search(&token, query, kinds, limit)
            .await
            .map_err(SearchError::Unavailable)?;

        let mut results = SearchResults::default();
        if kinds.contains(SearchKind::Track) {
            let tracks = response.tracks.map(|p| p.items).unwrap_or_default();
            results.tracks = Some(tracks.iter().map(normalize::track).collect());
        }
        if kinds.contains(SearchKind::Artist) {
            let artists = response.artists.map(|p| p.items).unwrap_or_default();
            results.artists = Some(artists.iter().map(normalize::artist).collect());
        }
        if kinds.contains(SearchKind::Album) {
            let albums = response.albums.map(|p| p.items).unwrap_or_default();
            results.albums = Some(albums.iter().map(normalize::album).collect());
        }

        Ok(results)
    }

    /// Fetches the playable tracks of one provider playlist, dropping items
    /// without a track or preview URL. Live-only: playlist contents have no
    /// meaningful local substitute, so failures propagate.
    pub async fn playlist_tracks(
        &self,
        playlist_id: &str,
        limit: u32,
    ) -> Result<Vec<CanonicalTrack>, ProviderError> {
        let token = self.credentials.current_token()?;

        let response = self
            .provider
            .get_playlist_tracks(&token, playlist_id, limit)
            .await?;

        Ok(response
            .items
            .iter()
            .filter_map(|item| item.track.as_ref())
            .filter(|track| track.preview_url.is_some())
            .map(normalize::track)
            .collect())
    }

    /// A "popular now" selection: tracks of the first featured playlist,
    /// falling back to "happy" recommendations. Never fails — the happy
    /// recommendation path itself degrades to the fallback catalog.
    pub async fn popular_tracks(&self, limit: u32) -> Vec<CanonicalTrack> {
        if !self.credentials.is_usable() {
            return self.recommend_by_mood("happy", limit).await;
        }

        let playlists = self.featured_playlists(5).await;

        if let Some(first) = playlists.first() {
            match self.playlist_tracks(&first.id, limit).await {
                Ok(tracks) if !tracks.is_empty() => return tracks,
                Ok(_) => {}
                Err(e) => {
                    warning!(
                        "Popular tracks via playlist '{}' failed: {}. Falling back to happy recommendations.",
                        first.name,
                        e
                    );
                }
            }
        }

        self.recommend_by_mood("happy", limit).await
    }
}
