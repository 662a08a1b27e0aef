use moodtune::fallback;

const SUPPORTED_MOODS: [&str; 7] = [
    "happy",
    "sad",
    "chill",
    "energetic",
    "focus",
    "party",
    "sleep",
];

#[test]
fn test_every_supported_mood_has_tracks() {
    for mood in SUPPORTED_MOODS {
        let tracks = fallback::tracks_for(mood, 20);
        assert!(!tracks.is_empty(), "no fallback tracks for {}", mood);
    }
}

#[test]
fn test_limit_is_respected() {
    let available = fallback::tracks_available("happy");
    assert!(available >= 3);

    // min(limit, available) in both directions
    assert_eq!(fallback::tracks_for("happy", 2).len(), 2);
    assert_eq!(fallback::tracks_for("happy", 100).len(), available);
}

#[test]
fn test_zero_limit_returns_empty() {
    assert!(fallback::tracks_for("happy", 0).is_empty());
    assert!(fallback::playlists(0).is_empty());
}

#[test]
fn test_unknown_mood_gets_default_records() {
    let unknown = fallback::tracks_for("no-such-mood", 10);
    let default = fallback::tracks_for("chill", 10);

    assert_eq!(unknown, default);
}

#[test]
fn test_records_are_deterministic() {
    assert_eq!(
        fallback::tracks_for("sad", 10),
        fallback::tracks_for("sad", 10)
    );
}

#[test]
fn test_record_shape() {
    for track in fallback::tracks_for("party", 20) {
        // Synthetic local ids, no preview, placeholder image
        assert!(track.id.starts_with("local-party-"), "id: {}", track.id);
        assert_eq!(track.id, track.spotify_id);
        assert!(track.preview_url.is_none());
        assert!(track.image.is_empty());

        assert!(!track.name.is_empty());
        assert!(!track.artist.is_empty());

        // Duration is M:SS with zero-padded seconds
        let (minutes, seconds) = track
            .duration
            .split_once(':')
            .expect("duration must be M:SS");
        assert!(minutes.parse::<u64>().is_ok());
        assert_eq!(seconds.len(), 2);
        assert!(seconds.parse::<u64>().expect("numeric seconds") < 60);
    }
}

#[test]
fn test_playlist_catalog() {
    let playlists = fallback::playlists(100);
    assert!(playlists.len() >= 5);

    for playlist in &playlists {
        assert!(playlist.id.starts_with("local-playlist-"));
        assert!(!playlist.name.is_empty());
        assert!(playlist.tracks > 0);
        assert_eq!(playlist.owner, "Moodtune");
    }

    assert_eq!(fallback::playlists(3).len(), 3);
}
