//! Configuration management for myspot.
//!
//! Configuration values come from environment variables, optionally seeded
//! from a `.env` file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (for endpoints and the callback server only)
//!
//! Credentials and the user identifier have no defaults and must be set.

use std::{env, path::PathBuf};

pub const APP_DIR: &str = "myspot";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8888/callback";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Scopes requested by the user token flow.
pub const USER_SCOPE: &str = "playlist-modify-public user-read-recently-played";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up at:
/// - Linux: `~/.local/share/myspot/.env`
/// - macOS: `~/Library/Application Support/myspot/.env`
/// - Windows: `%LOCALAPPDATA%/myspot/.env`
///
/// The directory is created when missing. A missing `.env` file is fine,
/// since every value can also come straight from the environment.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = app_dir().join(".env");
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

/// Returns the platform-specific data directory of the application.
pub fn app_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Returns the token cache file for the given user.
///
/// Every user gets their own file, e.g. `~/.local/share/myspot/.cache-alice`.
pub fn cache_path(user_id: &str) -> PathBuf {
    app_dir().join(format!(".cache-{user_id}"))
}

/// Returns the log file path, `MYSPOT_LOG_FILE` or `myspot.log` in the data
/// directory.
pub fn log_file() -> PathBuf {
    env::var("MYSPOT_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| app_dir().join("myspot.log"))
}

/// Returns the Spotify user ID (`SPOTIFY_USER_ID`).
pub fn spotify_user() -> Result<String, String> {
    required("SPOTIFY_USER_ID")
}

/// Returns the Spotify API client ID (`SPOTIFY_API_AUTH_CLIENT_ID`).
pub fn spotify_client_id() -> Result<String, String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify API client secret (`SPOTIFY_API_AUTH_CLIENT_SECRET`).
///
/// The secret should never end up in logs or version control.
pub fn spotify_client_secret() -> Result<String, String> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Returns the OAuth redirect URI (`SPOTIFY_API_REDIRECT_URI`).
///
/// Must match the redirect URI registered for the application and point at
/// the `/callback` route of the local server.
pub fn spotify_redirect_uri() -> String {
    optional("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Returns the bind address of the local OAuth callback server
/// (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the Spotify OAuth authorization URL (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    optional("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Returns the Spotify OAuth token exchange URL (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

fn required(key: &str) -> Result<String, String> {
    env::var(key).map_err(|_| format!("{key} must be set"))
}

fn optional(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_is_keyed_by_user() {
        let alice = cache_path("alice");
        let bob = cache_path("bob");

        assert_ne!(alice, bob);
        assert!(alice.ends_with(".cache-alice"));
        assert!(alice.starts_with(app_dir()));
    }

    #[test]
    fn optional_falls_back_to_default() {
        assert_eq!(
            optional("MYSPOT_TEST_SURELY_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn required_names_the_missing_variable() {
        let err = required("MYSPOT_TEST_SURELY_UNSET_VARIABLE").unwrap_err();
        assert_eq!(err, "MYSPOT_TEST_SURELY_UNSET_VARIABLE must be set");
    }
}
