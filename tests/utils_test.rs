use moodtune::utils::{
    self, SearchKind, SearchKinds, mood_color, mood_display_name, mood_emoji, normalize_mood_key,
    parse_search_kinds,
};

#[test]
fn test_normalize_mood_key() {
    assert_eq!(normalize_mood_key("Happy"), "happy");
    assert_eq!(normalize_mood_key("  ENERGETIC  "), "energetic");
    assert_eq!(normalize_mood_key(""), "");
}

#[test]
fn test_mood_display_name() {
    assert_eq!(mood_display_name("happy"), "Happy");
    assert_eq!(mood_display_name(" CHILL "), "Chill");
    assert_eq!(mood_display_name(""), "");
}

#[test]
fn test_mood_emoji_and_color_have_defaults() {
    assert_eq!(mood_emoji("party"), "🎉");
    assert_eq!(mood_color("sleep"), "#191970");

    // Unknown moods get the neutral fallbacks, never panic
    assert_eq!(mood_emoji("unknown"), "🎵");
    assert_eq!(mood_color("unknown"), "#808080");
}

#[test]
fn test_parse_single_kind() {
    let kinds = parse_search_kinds("track").unwrap();
    assert!(kinds.contains(SearchKind::Track));
    assert!(!kinds.contains(SearchKind::Artist));
    assert_eq!(kinds.to_string(), "track");
}

#[test]
fn test_parse_multiple_kinds_orders_and_dedups() {
    let kinds = parse_search_kinds("album,track,album").unwrap();
    assert_eq!(kinds.iter().count(), 2);
    // BTreeSet ordering: track < artist < album
    assert_eq!(kinds.to_string(), "track,album");
}

#[test]
fn test_parse_is_case_insensitive_and_accepts_plurals() {
    let kinds = parse_search_kinds(" Tracks , ARTISTS ").unwrap();
    assert!(kinds.contains(SearchKind::Track));
    assert!(kinds.contains(SearchKind::Artist));
    assert!(!kinds.contains(SearchKind::Album));
}

#[test]
fn test_parse_all_expands_to_every_kind() {
    let kinds = parse_search_kinds("all").unwrap();
    for kind in SearchKind::ALL {
        assert!(kinds.contains(kind), "missing kind: {}", kind);
    }
    assert_eq!(kinds.to_string(), "track,artist,album");
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(parse_search_kinds("").is_err());
    assert!(parse_search_kinds("   ").is_err());
    assert!(parse_search_kinds("track,,album").is_err());
    assert!(parse_search_kinds("podcast").is_err());
}

#[test]
fn test_default_kinds_is_track_only() {
    let kinds = SearchKinds::default();
    assert!(kinds.contains(SearchKind::Track));
    assert_eq!(kinds.iter().count(), 1);
}

#[test]
fn test_clap_value_parser_signature() {
    // parse_search_kinds doubles as the clap value parser; make sure the
    // error type renders something useful for the CLI.
    let err = utils::parse_search_kinds("bogus").unwrap_err();
    assert!(err.contains("bogus"));
}
