//! Configuration management for the producer credits exporter.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (highest priority, handled by the caller)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::Error;

/// Environment variable holding the Genius client access token.
pub const TOKEN_VAR: &str = "GENIUS_ACCESS_TOKEN";

/// Environment variable overriding the Genius API base URL.
pub const API_URL_VAR: &str = "GENIUS_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.genius.com";

pub const DEFAULT_OUTPUT: &str = "songs_by_producer.csv";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory if it doesn't exist and loads variables from
/// `prodcredits/.env` inside the platform-specific local data directory.
/// A missing file is not an error; variables that are already set in the
/// process environment are never overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/prodcredits/.env`
/// - macOS: `~/Library/Application Support/prodcredits/.env`
/// - Windows: `%LOCALAPPDATA%/prodcredits/.env`
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Genius API base URL without a trailing slash.
///
/// # Example
///
/// ```
/// let api_url = genius_apiurl(); // e.g., "https://api.genius.com"
/// ```
pub fn genius_apiurl() -> String {
    env::var(API_URL_VAR)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Picks the access token, preferring the explicit flag over the environment.
///
/// Empty values count as absent on both sides.
pub fn resolve_token(flag: Option<String>) -> Result<String, Error> {
    flag.filter(|t| !t.trim().is_empty())
        .or_else(|| env::var(TOKEN_VAR).ok().filter(|t| !t.trim().is_empty()))
        .ok_or(Error::MissingToken)
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("prodcredits/.env");
    path
}
