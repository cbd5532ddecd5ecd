use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;

use crate::{
    error::Error,
    genius::{GeniusApi, songs},
    types::{OutputRecord, SongStub},
};

/// Keeps the songs on which `producer_id` holds a producer credit.
///
/// Fetches the detail record of every stub in order and projects the ones
/// crediting `producer_id` into an [`OutputRecord`]. The output preserves
/// input order. The throttle's detail delay is awaited after each fetch.
///
/// # Error Handling
///
/// All or nothing: the first failed detail fetch aborts the pass and no
/// records are returned, so a broken run can never be exported.
pub async fn filter_songs_by_producer(
    api: &GeniusApi,
    song_list: &[SongStub],
    producer_id: u64,
) -> Result<Vec<OutputRecord>, Error> {
    let pb = ProgressBar::new(song_list.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}") {
        pb.set_style(style);
    }

    let mut filtered = Vec::new();

    for stub in song_list {
        let detail = match songs::get_song(api, stub.id).await {
            Ok(detail) => detail,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        if detail.is_produced_by(producer_id) {
            filtered.push(OutputRecord::from_detail(stub.id, &detail));
            pb.set_message(format!("{} matches", filtered.len()));
        }
        pb.inc(1);

        sleep(api.throttle().detail_delay).await;
    }

    pb.finish_and_clear();
    Ok(filtered)
}
