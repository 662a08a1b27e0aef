use tabled::Table;

use crate::{
    cli::spinner,
    error, info,
    recommend::RecommendationClient,
    types::{AlbumTableRow, ArtistTableRow, TrackTableRow},
    utils::SearchKinds,
};

/// Searches the provider and prints one table per requested kind.
///
/// Search has no fallback dataset, so this is the one command that
/// terminates with an error when the provider is unavailable; an empty
/// result set for a valid query is reported normally.
pub async fn search(client: &RecommendationClient, query: String, kinds: SearchKinds, limit: u32) {
    let pb = spinner("Searching the provider...");
    let results = client.search(&query, &kinds, limit).await;
    pb.finish_and_clear();

    let results = match results {
        Ok(results) => results,
        Err(e) => error!("{}", e),
    };

    let mut any = false;

    if let Some(tracks) = results.tracks {
        any = any || !tracks.is_empty();
        info!("Tracks matching '{}': {}", query.trim(), tracks.len());
        if !tracks.is_empty() {
            let rows: Vec<TrackTableRow> = tracks
                .into_iter()
                .map(|t| TrackTableRow {
                    name: t.name,
                    artist: t.artist,
                    album: t.album,
                    duration: t.duration,
                })
                .collect();
            println!("{}", Table::new(rows));
        }
    }

    if let Some(artists) = results.artists {
        any = any || !artists.is_empty();
        info!("Artists matching '{}': {}", query.trim(), artists.len());
        if !artists.is_empty() {
            let rows: Vec<ArtistTableRow> = artists
                .into_iter()
                .map(|a| ArtistTableRow {
                    name: a.name,
                    genres: a.genres.join(", "),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
    }

    if let Some(albums) = results.albums {
        any = any || !albums.is_empty();
        info!("Albums matching '{}': {}", query.trim(), albums.len());
        if !albums.is_empty() {
            let rows: Vec<AlbumTableRow> = albums
                .into_iter()
                .map(|a| AlbumTableRow {
                    name: a.name,
                    artist: a.artist,
                    released: a.release_date,
                    tracks: a.total_tracks,
                })
                .collect();
            println!("{}", Table::new(rows));
        }
    }

    if !any {
        info!("No results for '{}'.", query.trim());
    }
}
