use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;

use crate::{
    error::Error,
    genius::GeniusApi,
    types::{ArtistSongsResponse, SongDetail, SongResponse, SongStub},
};

/// Page size requested from the artist songs listing.
pub const PER_PAGE: u32 = 50;

/// Retrieves one page of songs attributed to an artist.
///
/// Pages are 1-indexed. An empty vector means the catalog is exhausted;
/// the API reports no total.
pub async fn get_songs_page(
    api: &GeniusApi,
    artist_id: u64,
    page: u32,
) -> Result<Vec<SongStub>, Error> {
    let path = format!("/artists/{id}/songs", id = artist_id);
    let res: ArtistSongsResponse = api
        .get_json(&path, &[("per_page", PER_PAGE), ("page", page)])
        .await?;

    Ok(res.response.songs)
}

/// Collects every song attributed to an artist, in API order.
///
/// Requests page 1, 2, 3, … and concatenates their items until a page comes
/// back empty. The throttle's page delay is awaited after every non-empty
/// page, so it always sits between two requests.
///
/// # Progress Indication
///
/// Displays a spinner with the running song count while pages are fetched.
///
/// # Error Handling
///
/// The first failing page aborts the walk; songs from earlier pages are
/// discarded and the error is returned.
pub async fn fetch_all_songs_for_artist(
    api: &GeniusApi,
    artist_id: u64,
) -> Result<Vec<SongStub>, Error> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching songs...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let mut all_songs: Vec<SongStub> = Vec::new();
    let mut page = 1;

    loop {
        let songs = match get_songs_page(api, artist_id, page).await {
            Ok(songs) => songs,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        if songs.is_empty() {
            break;
        }

        all_songs.extend(songs);
        pb.set_message(format!("Fetched {} songs...", all_songs.len()));
        page += 1;
        sleep(api.throttle().page_delay).await;
    }

    pb.finish_and_clear();
    Ok(all_songs)
}

/// Fetches the full record for one song, including its producer credits.
pub async fn get_song(api: &GeniusApi, song_id: u64) -> Result<SongDetail, Error> {
    let path = format!("/songs/{id}", id = song_id);
    let no_query: [(&str, &str); 0] = [];
    let res: SongResponse = api.get_json(&path, &no_query).await?;

    Ok(res.response.song)
}
