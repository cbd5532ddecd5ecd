use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// An artist as the API identifies it.
///
/// Used both for search hits and for the entries of a song's producer
/// credits; the `id` is what the producer filter compares against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: u64,
    pub name: String,
}

/// Body of `GET /search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub response: SearchContainer,
}

/// Search hits in the order the API ranks them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchContainer {
    pub hits: Vec<Hit>,
}

/// A single search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    pub result: HitResult,
}

/// The song a hit points at; only its primary artist matters here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitResult {
    pub primary_artist: Artist,
}

/// Body of `GET /artists/{id}/songs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSongsResponse {
    pub response: ArtistSongsContainer,
}

/// One page of an artist's catalog. An empty `songs` ends pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSongsContainer {
    pub songs: Vec<SongStub>,
}

/// A catalog entry; just enough to fetch the full song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongStub {
    pub id: u64,
}

/// Body of `GET /songs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongResponse {
    pub response: SongContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongContainer {
    pub song: SongDetail,
}

/// Full song record including its producer credits.
///
/// Only `title`, `primary_artist.name` and `url` are required. The song id
/// is taken from the stub that led to the fetch, so a body without `id`
/// still decodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongDetail {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    pub primary_artist: PrimaryArtist,
    pub url: String,
    #[serde(default)]
    pub release_date: Option<String>,
    // The API sends either a list, null, or nothing at all.
    #[serde(default)]
    pub producer_artists: Option<Vec<Artist>>,
}

/// Primary artist of a song detail; only the display name is exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryArtist {
    pub name: String,
}

impl SongDetail {
    /// Producer credits in the order the API lists them.
    pub fn producers(&self) -> &[Artist] {
        self.producer_artists.as_deref().unwrap_or_default()
    }

    /// Whether `producer_id` appears among the producer credits.
    pub fn is_produced_by(&self, producer_id: u64) -> bool {
        self.producers().iter().any(|p| p.id == producer_id)
    }
}

/// One exported row. Field declaration order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct OutputRecord {
    pub song_id: u64,
    pub title: String,
    pub primary_artist: String,
    pub producers: String,
    pub release_date: String,
    pub url: String,
}

impl OutputRecord {
    /// Flattens a song detail into a row.
    ///
    /// Producer names are joined with `"; "` in credit order and a missing
    /// release date becomes an empty string.
    pub fn from_detail(song_id: u64, detail: &SongDetail) -> Self {
        OutputRecord {
            song_id,
            title: detail.title.clone(),
            primary_artist: detail.primary_artist.name.clone(),
            producers: detail
                .producers()
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            release_date: detail.release_date.clone().unwrap_or_default(),
            url: detail.url.clone(),
        }
    }
}
