//! # CLI Module
//!
//! This module drives a full export run and owns the console feedback
//! around it. The heavy lifting lives in [`crate::genius`],
//! [`crate::producer`] and [`crate::export`]; this layer wires them into
//! one linear pipeline:
//!
//! ```text
//! name ─▶ find_producer ─▶ fetch_all_songs_for_artist ─▶ filter_songs_by_producer ─▶ save_to_csv
//! ```
//!
//! Each stage runs to completion before the next starts, so the CSV is only
//! ever written from a fully filtered result.
//!
//! ## Usage Patterns
//!
//! ```bash
//! prodcredits "Metro Boomin"                          # token from GENIUS_ACCESS_TOKEN
//! prodcredits "Metro Boomin" --token abc --output metro.csv
//! prodcredits "Metro Boomin" --table                  # also print the matches
//! ```

mod search;

pub use search::run;
pub use search::search;
