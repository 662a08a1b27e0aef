//! Mood key to provider parameter translation.
//!
//! The mapping is deterministic product data, not logic: seven built-in
//! entries tuned against the provider's audio-feature model, overridable at
//! runtime by a JSON resource in the local data directory (see
//! [`MoodParameterMap::load`]). Lookups are total; unknown or missing keys
//! resolve to the documented default profile ("chill").

use std::collections::HashMap;

use crate::{types::MoodParameters, utils, warning};

/// Mood key whose profile serves as the default for unknown keys.
pub const DEFAULT_MOOD: &str = "chill";

/// Deterministic mood-to-parameter lookup table.
///
/// Constructed once at startup and shared read-only afterwards. The table
/// always contains at least the built-in entries, so `parameters_for` can
/// never fail.
#[derive(Debug, Clone)]
pub struct MoodParameterMap {
    table: HashMap<String, MoodParameters>,
}

impl MoodParameterMap {
    /// Returns the map with the built-in table only.
    pub fn builtin() -> Self {
        Self {
            table: builtin_table(),
        }
    }

    /// Returns the built-in table merged with operator overrides.
    ///
    /// Reads a JSON document mapping mood keys to parameter objects from
    /// `path` (normally [`crate::config::mood_table_path`]). Overrides
    /// replace built-in entries key by key and may introduce new moods. A
    /// missing file is the normal case; an unreadable or invalid file is
    /// reported as a warning and ignored, and so is any individual entry
    /// that fails validation, since a tuning mistake must not take down
    /// recommendations or send out-of-range parameters to the provider.
    pub async fn load(path: &std::path::Path) -> Self {
        let mut map = Self::builtin();

        let content = match async_fs::read_to_string(path).await {
            Ok(content) => content,
            Err(_) => return map,
        };

        match serde_json::from_str::<HashMap<String, MoodParameters>>(&content) {
            Ok(overrides) => {
                for (key, params) in overrides {
                    let key = utils::normalize_mood_key(&key);
                    if let Err(reason) = validate_parameters(&params) {
                        warning!("Ignoring mood override '{}': {}", key, reason);
                        continue;
                    }
                    map.table.insert(key, params);
                }
            }
            Err(e) => {
                warning!("Ignoring invalid mood table at {}: {}", path.display(), e);
            }
        }

        map
    }

    /// Looks up the parameters for a mood key. Never fails: keys are
    /// normalized (trimmed, lowercased) and unknown keys resolve to the
    /// [`DEFAULT_MOOD`] profile.
    pub fn parameters_for(&self, mood: &str) -> &MoodParameters {
        let key = utils::normalize_mood_key(mood);
        self.table
            .get(&key)
            .unwrap_or_else(|| &self.table[DEFAULT_MOOD])
    }

    /// All known mood keys, sorted. Used by the CLI for help output.
    pub fn known_moods(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.table.keys().cloned().collect();
        keys.sort();
        keys
    }
}

/// Checks the invariants every table entry must satisfy: all audio-feature
/// values within [0, 1] and at least one non-empty seed genre.
fn validate_parameters(params: &MoodParameters) -> Result<(), String> {
    let unit = 0.0..=1.0;

    if !unit.contains(&params.target_valence) {
        return Err(format!(
            "target_valence {} is outside [0, 1]",
            params.target_valence
        ));
    }
    if !unit.contains(&params.target_energy) {
        return Err(format!(
            "target_energy {} is outside [0, 1]",
            params.target_energy
        ));
    }

    let optional = [
        ("min_valence", params.min_valence),
        ("max_valence", params.max_valence),
        ("min_energy", params.min_energy),
        ("target_acousticness", params.target_acousticness),
        ("target_instrumentalness", params.target_instrumentalness),
        ("target_danceability", params.target_danceability),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            if !unit.contains(&value) {
                return Err(format!("{} {} is outside [0, 1]", name, value));
            }
        }
    }

    if params.seed_genres.is_empty() || params.seed_genres.iter().any(|g| g.trim().is_empty()) {
        return Err("at least one non-empty seed genre is required".to_string());
    }

    Ok(())
}

/// The built-in mood table. Target valence/energy are in [0, 1]; every entry
/// carries between one and three seed genres.
fn builtin_table() -> HashMap<String, MoodParameters> {
    let mut table = HashMap::new();

    table.insert(
        "happy".to_string(),
        MoodParameters {
            target_valence: 0.8,
            target_energy: 0.7,
            min_valence: Some(0.6),
            seed_genres: genres(&["pop", "funk", "soul"]),
            ..blank()
        },
    );
    table.insert(
        "sad".to_string(),
        MoodParameters {
            target_valence: 0.2,
            target_energy: 0.3,
            max_valence: Some(0.4),
            seed_genres: genres(&["indie", "alternative", "blues"]),
            ..blank()
        },
    );
    table.insert(
        "chill".to_string(),
        MoodParameters {
            target_valence: 0.5,
            target_energy: 0.3,
            target_acousticness: Some(0.7),
            seed_genres: genres(&["chill", "ambient", "lo-fi"]),
            ..blank()
        },
    );
    table.insert(
        "energetic".to_string(),
        MoodParameters {
            target_valence: 0.7,
            target_energy: 0.9,
            min_energy: Some(0.7),
            seed_genres: genres(&["electronic", "rock", "pop"]),
            ..blank()
        },
    );
    table.insert(
        "focus".to_string(),
        MoodParameters {
            target_valence: 0.4,
            target_energy: 0.4,
            target_instrumentalness: Some(0.8),
            seed_genres: genres(&["ambient", "classical", "instrumental"]),
            ..blank()
        },
    );
    table.insert(
        "party".to_string(),
        MoodParameters {
            target_valence: 0.9,
            target_energy: 0.9,
            target_danceability: Some(0.8),
            seed_genres: genres(&["dance", "electronic", "pop"]),
            ..blank()
        },
    );
    table.insert(
        "sleep".to_string(),
        MoodParameters {
            target_valence: 0.3,
            target_energy: 0.1,
            target_acousticness: Some(0.9),
            seed_genres: genres(&["ambient", "sleep", "nature"]),
            ..blank()
        },
    );

    table
}

fn genres(names: &[&str]) -> Vec<String> {
    names.iter().map(|g| g.to_string()).collect()
}

/// An all-absent parameter set used as struct-update base for the table
/// entries above.
fn blank() -> MoodParameters {
    MoodParameters {
        target_valence: 0.0,
        target_energy: 0.0,
        min_valence: None,
        max_valence: None,
        min_energy: None,
        target_acousticness: None,
        target_instrumentalness: None,
        target_danceability: None,
        seed_genres: Vec::new(),
    }
}
