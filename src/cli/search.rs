use std::path::Path;

use tabled::Table;

use crate::{
    Res,
    export::save_to_csv,
    genius::{GeniusApi, search::find_producer, songs::fetch_all_songs_for_artist},
    info,
    producer::filter_songs_by_producer,
    success,
};

/// Exports every song `producer` is credited on, using the configured API.
///
/// Returns the number of CSV rows written; zero when nothing matched.
pub async fn search(producer: &str, token: &str, output: &Path, show_table: bool) -> Res<usize> {
    let api = GeniusApi::from_env(token);
    run(&api, producer, output, show_table).await
}

/// Runs the lookup, fetch, filter and export stages against `api`.
pub async fn run(api: &GeniusApi, producer: &str, output: &Path, show_table: bool) -> Res<usize> {
    info!("Looking up producer '{}'…", producer);
    let artist = find_producer(api, producer).await?;
    info!(
        "Found producer ID {} ({}). Fetching song list…",
        artist.id, artist.name
    );

    let all_songs = fetch_all_songs_for_artist(api, artist.id).await?;
    info!(
        "Got {} total songs associated with artist ID {}.",
        all_songs.len(),
        artist.id
    );

    info!("Filtering songs where this artist is credited as producer…");
    let produced = filter_songs_by_producer(api, &all_songs, artist.id).await?;
    info!(
        "{} songs found where '{}' is a producer.",
        produced.len(),
        artist.name
    );

    if show_table && !produced.is_empty() {
        println!("{}", Table::new(&produced));
    }

    info!("Writing to '{}'…", output.display());
    let written = save_to_csv(&produced, output).await?;
    success!("Done.");

    Ok(written)
}
