use serde::{Deserialize, Serialize};
use tabled::Tabled;

// ---------------------------------------------------------------------------
// Canonical records
//
// Provider-agnostic shapes used throughout the system and serialized on the
// HTTP API. Field names match the original wire format consumed by the
// frontend (`artist`, `duration`, `spotify_url`, ...), so normalization is
// the only place that knows provider-specific field names.
// ---------------------------------------------------------------------------

/// A track in canonical shape. `duration` is a zero-padded `M:SS` string,
/// `image` is empty when the provider supplied no artwork, `preview_url` is
/// absent for tracks without an audio preview (and always absent for
/// fallback records).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTrack {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
    pub image: String,
    pub preview_url: Option<String>,
    pub spotify_url: String,
    pub spotify_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalArtist {
    pub id: String,
    pub name: String,
    pub image: String,
    pub genres: Vec<String>,
    pub spotify_url: String,
    pub spotify_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalAlbum {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub image: String,
    pub release_date: String,
    pub total_tracks: u32,
    pub spotify_url: String,
    pub spotify_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalPlaylist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub tracks: u64,
    pub owner: String,
    pub spotify_url: String,
    pub spotify_id: String,
}

/// Per-section search results. A section is `None` when the corresponding
/// kind was not requested; a requested section with zero hits is `Some` of an
/// empty list, which is a valid non-error outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<CanonicalTrack>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artists: Option<Vec<CanonicalArtist>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<CanonicalAlbum>>,
}

// ---------------------------------------------------------------------------
// Mood parameters
// ---------------------------------------------------------------------------

/// Provider recommendation parameters for one mood. Target values live in
/// [0, 1]; optional min/max bounds tighten the result set for moods where a
/// target alone drifts too far (e.g. a "happy" floor on valence).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodParameters {
    pub target_valence: f64,
    pub target_energy: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_valence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_valence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_energy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_acousticness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_instrumentalness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_danceability: Option<f64>,
    pub seed_genres: Vec<String>,
}

impl MoodParameters {
    /// Renders the parameters as query pairs for the recommendations
    /// endpoint. Seed genres are comma-joined as the provider expects.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("seed_genres", self.seed_genres.join(",")),
            ("target_valence", self.target_valence.to_string()),
            ("target_energy", self.target_energy.to_string()),
        ];

        let optional = [
            ("min_valence", self.min_valence),
            ("max_valence", self.max_valence),
            ("min_energy", self.min_energy),
            ("target_acousticness", self.target_acousticness),
            ("target_instrumentalness", self.target_instrumentalness),
            ("target_danceability", self.target_danceability),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                query.push((key, value.to_string()));
            }
        }

        query
    }
}

// ---------------------------------------------------------------------------
// Token exchange
// ---------------------------------------------------------------------------

/// Response of the client-credentials token exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub expires_in: u64,
}

// ---------------------------------------------------------------------------
// Raw provider payloads
//
// Deserialization targets for provider JSON. Every field the provider may
// omit or null carries a default so that normalization is total on any
// well-formed payload.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArtistRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAlbumRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<RawImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrack {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<RawArtistRef>,
    #[serde(default)]
    pub album: RawAlbumRef,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_urls: RawExternalUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArtist {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<RawImage>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub external_urls: RawExternalUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAlbum {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<RawArtistRef>,
    #[serde(default)]
    pub images: Vec<RawImage>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub total_tracks: u32,
    #[serde(default)]
    pub external_urls: RawExternalUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTracksRef {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOwner {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlaylist {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<RawImage>,
    #[serde(default)]
    pub tracks: RawTracksRef,
    #[serde(default)]
    pub owner: RawOwner,
    #[serde(default)]
    pub external_urls: RawExternalUrls,
}

/// One page of a paginated provider listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPaging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub tracks: Vec<RawTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<RawPaging<RawTrack>>,
    #[serde(default)]
    pub artists: Option<RawPaging<RawArtist>>,
    #[serde(default)]
    pub albums: Option<RawPaging<RawAlbum>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedPlaylistsResponse {
    pub playlists: RawPaging<RawPlaylist>,
}

/// Playlist items wrap their track; the track may be null for removed or
/// market-restricted entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlaylistItem {
    #[serde(default)]
    pub track: Option<RawTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksResponse {
    #[serde(default)]
    pub items: Vec<RawPlaylistItem>,
}

// ---------------------------------------------------------------------------
// CLI table rows
// ---------------------------------------------------------------------------

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub genres: String,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub name: String,
    pub artist: String,
    pub released: String,
    pub tracks: u32,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub owner: String,
    pub tracks: u64,
    pub description: String,
}
