use tabled::Table;

use crate::{
    cli::spinner, info, recommend::RecommendationClient, types::PlaylistTableRow,
};

/// Prints featured playlists as a table. Never fails; degraded mode shows
/// the fallback playlist list.
pub async fn playlists(client: &RecommendationClient, limit: u32) {
    if !client.is_live() {
        info!("Provider unavailable; showing the local fallback catalog.");
    }

    let pb = spinner("Fetching featured playlists...");
    let results = client.featured_playlists(limit).await;
    pb.finish_and_clear();

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
}
