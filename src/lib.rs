//! Genius Producer Credits Exporter Library
//!
//! This library looks up a producer on the Genius API, walks every song
//! attributed to that artist, keeps the songs on which the artist holds a
//! producer credit, and exports the matches as CSV.
//!
//! # Modules
//!
//! - `cli` - Orchestration of the lookup, fetch, filter and export stages
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by every stage
//! - `export` - CSV export of matched songs
//! - `genius` - Genius API client implementation
//! - `producer` - Producer credit filtering and record projection
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use prodcredits::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> prodcredits::Res<()> {
//!     config::load_env().await?;
//!     let token = config::resolve_token(None)?;
//!     cli::search("Metro Boomin", &token, "songs.csv".as_ref(), false).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod genius;
pub mod producer;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the outer edges of the application where errors from different
/// layers (configuration, API, export) meet. Library stages return
/// [`error::Error`] directly.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Looking up producer '{}'…", name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only the
/// binary uses this; library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Request to /search failed");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for notices that don't stop the run, like an empty result set.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
