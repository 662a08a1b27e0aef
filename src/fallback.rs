//! Static fallback catalog for degraded mode.
//!
//! A small deterministic dataset of fully-formed canonical tracks and
//! playlists, served whenever live provider data cannot be obtained. Records
//! carry synthetic `local-` ids, an empty placeholder image, and no preview
//! URL. The catalog is defined once and never mutated, so two degraded
//! requests for the same mood always return the same records in the same
//! order.

use std::{collections::HashMap, sync::OnceLock};

use crate::{
    moods::DEFAULT_MOOD,
    types::{CanonicalPlaylist, CanonicalTrack},
    utils,
};

/// Returns at most `limit` fallback tracks for a mood.
///
/// Known moods map to their own list; unknown moods get the default mood's
/// records. The result is only empty when `limit` is 0.
pub fn tracks_for(mood: &str, limit: u32) -> Vec<CanonicalTrack> {
    let catalog = track_catalog();
    let key = utils::normalize_mood_key(mood);
    let tracks = catalog
        .get(key.as_str())
        .unwrap_or_else(|| &catalog[DEFAULT_MOOD]);

    tracks.iter().take(limit as usize).cloned().collect()
}

/// Number of fallback tracks available for a mood (after key resolution).
pub fn tracks_available(mood: &str) -> usize {
    let catalog = track_catalog();
    let key = utils::normalize_mood_key(mood);
    catalog
        .get(key.as_str())
        .unwrap_or_else(|| &catalog[DEFAULT_MOOD])
        .len()
}

/// Returns at most `limit` fallback playlists, one per mood.
pub fn playlists(limit: u32) -> Vec<CanonicalPlaylist> {
    playlist_catalog()
        .iter()
        .take(limit as usize)
        .cloned()
        .collect()
}

fn track_catalog() -> &'static HashMap<&'static str, Vec<CanonicalTrack>> {
    static CATALOG: OnceLock<HashMap<&'static str, Vec<CanonicalTrack>>> = OnceLock::new();
    CATALOG.get_or_init(build_track_catalog)
}

fn playlist_catalog() -> &'static Vec<CanonicalPlaylist> {
    static CATALOG: OnceLock<Vec<CanonicalPlaylist>> = OnceLock::new();
    CATALOG.get_or_init(build_playlist_catalog)
}

fn track(mood: &str, index: usize, name: &str, artist: &str, album: &str, duration: &str) -> CanonicalTrack {
    let id = format!("local-{}-{}", mood, index);
    CanonicalTrack {
        spotify_id: id.clone(),
        id,
        name: name.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        duration: duration.to_string(),
        image: String::new(),
        preview_url: None,
        spotify_url: String::new(),
    }
}

fn build_track_catalog() -> HashMap<&'static str, Vec<CanonicalTrack>> {
    let mut catalog = HashMap::new();

    catalog.insert(
        "happy",
        vec![
            track("happy", 1, "Happy", "Pharrell Williams", "G I R L", "3:53"),
            track("happy", 2, "Don't Start Now", "Dua Lipa", "Future Nostalgia", "3:03"),
            track("happy", 3, "Blinding Lights", "The Weeknd", "After Hours", "3:20"),
            track("happy", 4, "Watermelon Sugar", "Harry Styles", "Fine Line", "2:54"),
            track("happy", 5, "Levitating", "Dua Lipa ft. DaBaby", "Future Nostalgia", "3:23"),
        ],
    );
    catalog.insert(
        "sad",
        vec![
            track("sad", 1, "Someone Like You", "Adele", "21", "4:45"),
            track("sad", 2, "Fix You", "Coldplay", "X&Y", "4:54"),
            track("sad", 3, "Skinny Love", "Bon Iver", "For Emma, Forever Ago", "3:58"),
            track("sad", 4, "Liability", "Lorde", "Melodrama", "2:51"),
        ],
    );
    catalog.insert(
        "chill",
        vec![
            track("chill", 1, "Sunset Lover", "Petit Biscuit", "Petit Biscuit", "3:57"),
            track("chill", 2, "Holocene", "Bon Iver", "Bon Iver, Bon Iver", "5:36"),
            track("chill", 3, "Coffee", "Sylvan Esso", "Sylvan Esso", "4:27"),
            track("chill", 4, "Night Owl", "Galimatias", "Urban Flora", "3:00"),
        ],
    );
    catalog.insert(
        "energetic",
        vec![
            track("energetic", 1, "Titanium", "David Guetta ft. Sia", "Nothing but the Beat", "4:05"),
            track("energetic", 2, "Stronger", "Kanye West", "Graduation", "5:11"),
            track("energetic", 3, "Can't Hold Us", "Macklemore & Ryan Lewis", "The Heist", "4:18"),
            track("energetic", 4, "Run the World (Girls)", "Beyoncé", "4", "3:56"),
        ],
    );
    catalog.insert(
        "focus",
        vec![
            track("focus", 1, "Time", "Hans Zimmer", "Inception", "4:35"),
            track("focus", 2, "Experience", "Ludovico Einaudi", "In a Time Lapse", "5:15"),
            track("focus", 3, "Gymnopédie No. 1", "Erik Satie", "Gymnopédies", "3:05"),
            track("focus", 4, "Weightless", "Marconi Union", "Weightless", "8:09"),
        ],
    );
    catalog.insert(
        "party",
        vec![
            track("party", 1, "Uptown Funk", "Mark Ronson ft. Bruno Mars", "Uptown Special", "4:30"),
            track("party", 2, "24K Magic", "Bruno Mars", "24K Magic", "3:46"),
            track("party", 3, "Get Lucky", "Daft Punk ft. Pharrell Williams", "Random Access Memories", "4:08"),
            track("party", 4, "Yeah!", "Usher ft. Lil Jon, Ludacris", "Confessions", "4:10"),
        ],
    );
    catalog.insert(
        "sleep",
        vec![
            track("sleep", 1, "Clair de lune", "Claude Debussy", "Suite bergamasque", "5:20"),
            track("sleep", 2, "Nocturne Op. 9 No. 2", "Frédéric Chopin", "Nocturnes", "4:33"),
            track("sleep", 3, "Saturn", "Sleeping at Last", "Atlas: Space", "4:49"),
            track("sleep", 4, "Dream 3 (in the midst of my life)", "Max Richter", "Sleep", "8:14"),
        ],
    );

    catalog
}

fn playlist(index: usize, name: &str, description: &str, tracks: u64) -> CanonicalPlaylist {
    let id = format!("local-playlist-{}", index);
    CanonicalPlaylist {
        spotify_id: id.clone(),
        id,
        name: name.to_string(),
        description: description.to_string(),
        image: String::new(),
        tracks,
        owner: "Moodtune".to_string(),
        spotify_url: String::new(),
    }
}

fn build_playlist_catalog() -> Vec<CanonicalPlaylist> {
    vec![
        playlist(1, "Happy Hits", "Feel-good music to boost your mood", 50),
        playlist(2, "Sad Songs", "Music for when you're in your feelings", 42),
        playlist(3, "Chill Vibes", "Relaxing tunes to unwind", 35),
        playlist(4, "Workout Motivation", "High-energy music to power your workout", 60),
        playlist(5, "Deep Focus", "Music to help you concentrate", 45),
        playlist(6, "Party Anthems", "Dance and party hits for any celebration", 38),
        playlist(7, "Sleep Sounds", "Calm and soothing sounds for better sleep", 30),
    ]
}
