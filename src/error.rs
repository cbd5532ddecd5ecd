use std::{io, path::PathBuf};

use thiserror::Error;

/// Every way a run can fail. None of them are retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither `--token` nor `GENIUS_ACCESS_TOKEN` carried a credential.
    #[error("A Genius API token must be provided via --token or GENIUS_ACCESS_TOKEN.")]
    MissingToken,

    /// No search hit had a primary artist whose name contains the query.
    #[error("No producer artist found for '{0}'")]
    ProducerNotFound(String),

    /// An API call could not complete or came back with a non-success status.
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The CSV file could not be created or written at `path`.
    #[error("Cannot write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record could not be encoded as CSV.
    #[error("Cannot encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Wraps a failed API call, remembering which endpoint it was.
    pub(crate) fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Error::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }
}
