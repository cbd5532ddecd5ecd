use crate::{
    error::Error,
    genius::GeniusApi,
    types::{Artist, SearchResponse},
};

/// Resolves a producer name to a Genius artist.
///
/// Searches Genius for `name` and walks the hits in the order the API
/// returns them. The first hit whose primary artist's name contains `name`
/// (case-insensitive) wins, so "Mike" can resolve to "Mikey Smith" when that
/// hit comes first. Hits are not re-ranked.
///
/// # Returns
///
/// - `Ok(Artist)` - The matched artist ID and its display name as Genius spells it
/// - `Err(Error::ProducerNotFound)` - No hit matched
/// - `Err(Error::Transport)` - The search call failed
///
/// # Example
///
/// ```
/// let artist = find_producer(&api, "metro boomin").await?;
/// assert_eq!(artist.name, "Metro Boomin");
/// ```
pub async fn find_producer(api: &GeniusApi, name: &str) -> Result<Artist, Error> {
    let res: SearchResponse = api.get_json("/search", &[("q", name)]).await?;

    let needle = name.to_lowercase();
    res.response
        .hits
        .into_iter()
        .map(|hit| hit.result.primary_artist)
        .find(|artist| artist.name.to_lowercase().contains(&needle))
        .ok_or_else(|| Error::ProducerNotFound(name.to_string()))
}
