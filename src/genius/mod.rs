//! # Genius Integration Module
//!
//! This module is the only place that talks to the Genius API. It wraps a
//! `reqwest` client together with the bearer token and base URL, and
//! exposes the three calls the exporter needs.
//!
//! ## API Coverage
//!
//! - `GET /search?q=` - [`search::find_producer`] resolves a name to an artist
//! - `GET /artists/{id}/songs` - [`songs::fetch_all_songs_for_artist`] walks the catalog
//! - `GET /songs/{id}` - [`songs::get_song`] fetches credits for one song
//!
//! ## Request Pacing
//!
//! Calls are issued strictly one after another. A [`Throttle`] adds a fixed
//! pause after each catalog page and after each song detail so long runs
//! stay under the service's rate limits. There is no retry: the first
//! failing call ends the run.
//!
//! ## Usage Patterns
//!
//! ```rust
//! let api = GeniusApi::from_env(&token);
//! let artist = search::find_producer(&api, "Metro Boomin").await?;
//! let songs = songs::fetch_all_songs_for_artist(&api, artist.id).await?;
//! ```

pub mod search;
pub mod songs;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{config, error::Error};

/// Fixed pauses inserted between outbound calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    /// Pause after each non-empty catalog page.
    pub page_delay: Duration,
    /// Pause after each song detail fetch.
    pub detail_delay: Duration,
}

impl Default for Throttle {
    fn default() -> Self {
        Throttle {
            page_delay: Duration::from_millis(500),
            detail_delay: Duration::from_millis(200),
        }
    }
}

impl Throttle {
    /// No pauses at all, for talking to a local mock of the API.
    pub fn none() -> Self {
        Throttle {
            page_delay: Duration::ZERO,
            detail_delay: Duration::ZERO,
        }
    }
}

/// Authenticated handle on the Genius API.
#[derive(Debug, Clone)]
pub struct GeniusApi {
    client: Client,
    base_url: String,
    token: String,
    throttle: Throttle,
}

impl GeniusApi {
    /// Creates a client for `base_url` that authenticates with `token`.
    ///
    /// A trailing slash on `base_url` is dropped. Pauses default to
    /// [`Throttle::default`].
    ///
    /// # Example
    ///
    /// ```
    /// let api = GeniusApi::new("https://api.genius.com", token);
    /// ```
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        GeniusApi {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            throttle: Throttle::default(),
        }
    }

    /// Builds a client against the base URL from `GENIUS_API_URL`, or the
    /// public API when unset.
    pub fn from_env(token: impl Into<String>) -> Self {
        Self::new(config::genius_apiurl(), token)
    }

    /// Replaces the pauses inserted between calls.
    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    /// The pauses this client inserts between calls.
    pub fn throttle(&self) -> Throttle {
        self.throttle
    }

    /// Issues an authenticated GET and decodes the JSON body.
    ///
    /// Any send failure, non-success status, or undecodable body becomes
    /// [`Error::Transport`] carrying `path` so the failing call is known.
    pub(crate) async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let api_url = format!("{uri}{path}", uri = self.base_url, path = path);

        let response = self
            .client
            .get(&api_url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| Error::transport(path, e))?;

        response
            .json::<T>()
            .await
            .map_err(|e| Error::transport(path, e))
    }
}
