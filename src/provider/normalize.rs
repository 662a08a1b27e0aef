//! Response normalization.
//!
//! Pure, total mapping functions from raw provider payloads into the
//! canonical record shapes used by the rest of the system. All knowledge of
//! provider field names is confined to this module and `types.rs`; a missing
//! optional field maps to an empty string or list, never to an error.

use crate::types::{
    CanonicalAlbum, CanonicalArtist, CanonicalPlaylist, CanonicalTrack, RawAlbum, RawArtist,
    RawArtistRef, RawImage, RawPlaylist, RawTrack,
};

/// Converts milliseconds to a zero-padded `M:SS` string.
///
/// `0` -> `"0:00"`, `65000` -> `"1:05"`, `600000` -> `"10:00"`.
pub fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

/// First image URL of a provider image list, or an empty string.
fn first_image(images: &[RawImage]) -> String {
    images.first().map(|i| i.url.clone()).unwrap_or_default()
}

/// Artist display names joined with `", "`.
fn join_artists(artists: &[RawArtistRef]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn track(raw: &RawTrack) -> CanonicalTrack {
    CanonicalTrack {
        id: raw.id.clone(),
        name: raw.name.clone(),
        artist: join_artists(&raw.artists),
        album: raw.album.name.clone(),
        duration: format_duration(raw.duration_ms),
        image: first_image(&raw.album.images),
        preview_url: raw.preview_url.clone(),
        spotify_url: raw.external_urls.spotify.clone().unwrap_or_default(),
        spotify_id: raw.id.clone(),
    }
}

pub fn artist(raw: &RawArtist) -> CanonicalArtist {
    CanonicalArtist {
        id: raw.id.clone(),
        name: raw.name.clone(),
        image: first_image(&raw.images),
        genres: raw.genres.clone(),
        spotify_url: raw.external_urls.spotify.clone().unwrap_or_default(),
        spotify_id: raw.id.clone(),
    }
}

pub fn album(raw: &RawAlbum) -> CanonicalAlbum {
    CanonicalAlbum {
        id: raw.id.clone(),
        name: raw.name.clone(),
        artist: join_artists(&raw.artists),
        image: first_image(&raw.images),
        release_date: raw.release_date.clone(),
        total_tracks: raw.total_tracks,
        spotify_url: raw.external_urls.spotify.clone().unwrap_or_default(),
        spotify_id: raw.id.clone(),
    }
}

pub fn playlist(raw: &RawPlaylist) -> CanonicalPlaylist {
    CanonicalPlaylist {
        id: raw.id.clone(),
        name: raw.name.clone(),
        description: raw.description.clone().unwrap_or_default(),
        image: first_image(&raw.images),
        tracks: raw.tracks.total,
        owner: raw.owner.display_name.clone().unwrap_or_default(),
        spotify_url: raw.external_urls.spotify.clone().unwrap_or_default(),
        spotify_id: raw.id.clone(),
    }
}
