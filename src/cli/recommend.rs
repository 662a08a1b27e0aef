use tabled::Table;

use crate::{
    cli::spinner,
    info,
    recommend::RecommendationClient,
    success,
    types::{PlaylistTableRow, TrackTableRow},
    utils, warning,
};

/// Prints recommendations for a mood as a table.
///
/// Never fails: in degraded mode the table simply contains the fallback
/// catalog records. With `--open`, the top result's provider page is opened
/// in the default browser (fallback records have no provider page).
pub async fn recommend(
    client: &RecommendationClient,
    mood: String,
    limit: u32,
    playlists: bool,
    open: bool,
) {
    if !client.is_live() {
        info!("Provider unavailable; showing the local fallback catalog.");
    }

    if playlists {
        let pb = spinner("Fetching playlist recommendations...");
        let results = client.featured_playlists(limit).await;
        pb.finish_and_clear();

        info!(
            "{} Playlists for mood '{}'",
            utils::mood_emoji(&mood),
            utils::normalize_mood_key(&mood)
        );

        let rows: Vec<PlaylistTableRow> = results
            .into_iter()
            .map(|p| PlaylistTableRow {
                name: p.name,
                owner: p.owner,
                tracks: p.tracks,
                description: p.description,
            })
            .collect();

        println!("{}", Table::new(rows));
        return;
    }

    let pb = spinner("Fetching track recommendations...");
    let results = client.recommend_by_mood(&mood, limit).await;
    pb.finish_and_clear();

    info!(
        "{} Tracks for mood '{}'",
        utils::mood_emoji(&mood),
        utils::normalize_mood_key(&mood)
    );

    let first_url = results
        .first()
        .map(|t| t.spotify_url.clone())
        .unwrap_or_default();

    let rows: Vec<TrackTableRow> = results
        .into_iter()
        .map(|t| TrackTableRow {
            name: t.name,
            artist: t.artist,
            album: t.album,
            duration: t.duration,
        })
        .collect();

    println!("{}", Table::new(rows));

    if open {
        if first_url.is_empty() {
            warning!("Top result has no provider page to open.");
        } else if webbrowser::open(&first_url).is_ok() {
            success!("Opened top result in your browser.");
        } else {
            warning!("Failed to open browser. URL: {}", first_url);
        }
    }
}
