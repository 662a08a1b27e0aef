use std::{collections::BTreeSet, fmt};

/// Normalizes a mood key for table lookup: trimmed and lowercased.
pub fn normalize_mood_key(mood: &str) -> String {
    mood.trim().to_lowercase()
}

/// Capitalized display name for a mood key, e.g. `happy` -> `Happy`.
pub fn mood_display_name(mood: &str) -> String {
    let key = normalize_mood_key(mood);
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Emoji shown next to a mood in API responses and CLI headers.
pub fn mood_emoji(mood: &str) -> &'static str {
    match normalize_mood_key(mood).as_str() {
        "happy" => "😊",
        "sad" => "😢",
        "chill" => "😌",
        "energetic" => "💪",
        "focus" => "🧘",
        "party" => "🎉",
        "sleep" => "😴",
        _ => "🎵",
    }
}

/// Accent color associated with a mood, as a hex string.
pub fn mood_color(mood: &str) -> &'static str {
    match normalize_mood_key(mood).as_str() {
        "happy" => "#FFD700",
        "sad" => "#4169E1",
        "chill" => "#98FB98",
        "energetic" => "#FF6347",
        "focus" => "#DDA0DD",
        "party" => "#FF1493",
        "sleep" => "#191970",
        _ => "#808080",
    }
}

/// One searchable entity kind on the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchKind {
    Track,
    Artist,
    Album,
}

impl SearchKind {
    pub const ALL: [SearchKind; 3] = [SearchKind::Track, SearchKind::Artist, SearchKind::Album];
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SearchKind::Track => "track",
            SearchKind::Artist => "artist",
            SearchKind::Album => "album",
        };
        write!(f, "{}", s)
    }
}

/// An ordered, deduplicated set of search kinds. Renders as the
/// comma-separated `type` value the provider's search endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKinds(pub BTreeSet<SearchKind>);

impl SearchKinds {
    pub fn iter(&self) -> impl Iterator<Item = SearchKind> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, kind: SearchKind) -> bool {
        self.0.contains(&kind)
    }
}

impl Default for SearchKinds {
    /// Track-only, matching the original API's default search type.
    fn default() -> Self {
        let mut set = BTreeSet::new();
        set.insert(SearchKind::Track);
        SearchKinds(set)
    }
}

impl fmt::Display for SearchKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}", joined)
    }
}

/// Parses a comma-separated list of search kinds.
///
/// Accepts `track`, `artist`, `album` (case-insensitive, surrounding
/// whitespace tolerated, plural forms allowed) and the keyword `all`.
/// Duplicates collapse. Empty input or empty segments are errors so a typo
/// like `track,,album` does not silently narrow a search.
pub fn parse_search_kinds(input: &str) -> Result<SearchKinds, String> {
    if input.trim().is_empty() {
        return Err("search type list cannot be empty".to_string());
    }

    let mut set = BTreeSet::new();
    for segment in input.split(',') {
        let segment = segment.trim().to_lowercase();
        if segment.is_empty() {
            return Err("search type list contains an empty segment".to_string());
        }

        match segment.as_str() {
            "track" | "tracks" => {
                set.insert(SearchKind::Track);
            }
            "artist" | "artists" => {
                set.insert(SearchKind::Artist);
            }
            "album" | "albums" => {
                set.insert(SearchKind::Album);
            }
            "all" => {
                set.extend(SearchKind::ALL);
            }
            other => {
                return Err(format!(
                    "invalid value '{}' (expected track, artist, album, or all)",
                    other
                ));
            }
        }
    }

    Ok(SearchKinds(set))
}
