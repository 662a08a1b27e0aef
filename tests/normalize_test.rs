use moodtune::provider::normalize;
use moodtune::types::{RawAlbum, RawArtist, RawPlaylist, RawTrack};
use serde_json::json;

fn track_from(value: serde_json::Value) -> RawTrack {
    serde_json::from_value(value).expect("raw track must deserialize")
}

#[test]
fn test_format_duration() {
    assert_eq!(normalize::format_duration(0), "0:00");
    assert_eq!(normalize::format_duration(65_000), "1:05");
    assert_eq!(normalize::format_duration(125_000), "2:05");
    assert_eq!(normalize::format_duration(600_000), "10:00");

    // Sub-second remainders truncate
    assert_eq!(normalize::format_duration(999), "0:00");
    assert_eq!(normalize::format_duration(60_999), "1:00");
}

#[test]
fn test_track_normalization() {
    let raw = track_from(json!({
        "id": "11dFghVXANMlKmJXsNCbNl",
        "name": "Cut To The Feeling",
        "artists": [
            { "id": "a1", "name": "Carly Rae Jepsen" },
            { "id": "a2", "name": "Rufus Wainwright" }
        ],
        "album": {
            "name": "Cut To The Feeling",
            "images": [
                { "url": "https://i.scdn.co/image/large" },
                { "url": "https://i.scdn.co/image/small" }
            ]
        },
        "duration_ms": 207959,
        "preview_url": "https://p.scdn.co/mp3-preview/abc",
        "external_urls": { "spotify": "https://open.spotify.com/track/11dFghVXANMlKmJXsNCbNl" }
    }));

    let track = normalize::track(&raw);

    assert_eq!(track.id, "11dFghVXANMlKmJXsNCbNl");
    assert_eq!(track.spotify_id, track.id);
    assert_eq!(track.name, "Cut To The Feeling");
    // Multi-artist names join with ", "
    assert_eq!(track.artist, "Carly Rae Jepsen, Rufus Wainwright");
    assert_eq!(track.album, "Cut To The Feeling");
    assert_eq!(track.duration, "3:27");
    // First image wins
    assert_eq!(track.image, "https://i.scdn.co/image/large");
    assert_eq!(
        track.preview_url.as_deref(),
        Some("https://p.scdn.co/mp3-preview/abc")
    );
    assert_eq!(
        track.spotify_url,
        "https://open.spotify.com/track/11dFghVXANMlKmJXsNCbNl"
    );
}

#[test]
fn test_track_normalization_is_total_on_sparse_payloads() {
    // Null preview, empty image list, missing external urls
    let raw = track_from(json!({
        "id": "t1",
        "name": "Sparse",
        "artists": [{ "name": "Solo" }],
        "album": { "name": "Bare", "images": [] },
        "duration_ms": 1000,
        "preview_url": null
    }));

    let track = normalize::track(&raw);
    assert_eq!(track.image, "");
    assert!(track.preview_url.is_none());
    assert_eq!(track.spotify_url, "");

    // Even an empty object normalizes without panicking
    let empty = normalize::track(&track_from(json!({})));
    assert_eq!(empty.id, "");
    assert_eq!(empty.artist, "");
    assert_eq!(empty.duration, "0:00");
}

#[test]
fn test_artist_normalization() {
    let raw: RawArtist = serde_json::from_value(json!({
        "id": "ar1",
        "name": "Nils Frahm",
        "images": [{ "url": "https://i.scdn.co/image/artist" }],
        "genres": ["neo-classical", "ambient"],
        "external_urls": { "spotify": "https://open.spotify.com/artist/ar1" }
    }))
    .expect("raw artist must deserialize");

    let artist = normalize::artist(&raw);
    assert_eq!(artist.name, "Nils Frahm");
    assert_eq!(artist.genres, vec!["neo-classical", "ambient"]);
    assert_eq!(artist.image, "https://i.scdn.co/image/artist");
    assert_eq!(artist.spotify_id, "ar1");
}

#[test]
fn test_album_normalization() {
    let raw: RawAlbum = serde_json::from_value(json!({
        "id": "al1",
        "name": "Screws",
        "artists": [{ "name": "Nils Frahm" }],
        "images": [],
        "release_date": "2012-09-21",
        "total_tracks": 9,
        "external_urls": {}
    }))
    .expect("raw album must deserialize");

    let album = normalize::album(&raw);
    assert_eq!(album.artist, "Nils Frahm");
    assert_eq!(album.release_date, "2012-09-21");
    assert_eq!(album.total_tracks, 9);
    assert_eq!(album.image, "");
    assert_eq!(album.spotify_url, "");
}

#[test]
fn test_playlist_normalization_handles_null_description() {
    let raw: RawPlaylist = serde_json::from_value(json!({
        "id": "pl1",
        "name": "Mood Booster",
        "description": null,
        "images": [{ "url": "https://i.scdn.co/image/playlist" }],
        "tracks": { "total": 75 },
        "owner": { "display_name": "Spotify" },
        "external_urls": { "spotify": "https://open.spotify.com/playlist/pl1" }
    }))
    .expect("raw playlist must deserialize");

    let playlist = normalize::playlist(&raw);
    assert_eq!(playlist.description, "");
    assert_eq!(playlist.tracks, 75);
    assert_eq!(playlist.owner, "Spotify");
}

#[test]
fn test_playlist_normalization_handles_missing_owner_name() {
    let raw: RawPlaylist = serde_json::from_value(json!({
        "id": "pl2",
        "name": "Anonymous",
        "tracks": { "total": 1 },
        "owner": {}
    }))
    .expect("raw playlist must deserialize");

    assert_eq!(normalize::playlist(&raw).owner, "");
}
