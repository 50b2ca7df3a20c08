//! Spotify Playlist Companion Library
//!
//! This library wraps the Spotify Web API with a handful of conveniences:
//! typed entities built from the raw JSON payloads, a session facade that
//! resolves playlists by name or id, reads the listening history and picks
//! the best search match, and the two credential flows needed to talk to the
//! API at all.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `logging` - Tracing subscriber setup (console and log file)
//! - `management` - On-disk token cache
//! - `mapping` - Typed accessors over loosely-typed JSON payloads
//! - `models` - Artist, Album, Track and Playlist entities
//! - `server` - Local HTTP server for OAuth callbacks
//! - `session` - Session facade over a Spotify client
//! - `spotify` - Spotify Web API client and authentication flows
//! - `types` - Token and payload type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use myspot::{config, session::Session, spotify::{self, WebClient}};
//!
//! #[tokio::main]
//! async fn main() -> myspot::Res<()> {
//!     config::load_env().await?;
//!     let token = spotify::auth::get_user_token_from_env().await?;
//!     let session = Session::new(Arc::new(WebClient::new(token)));
//!     if let Some(playlist) = session.resolve_playlist("Focus").await? {
//!         println!("{}", playlist);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod management;
pub mod mapping;
pub mod models;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object so that HTTP errors, mapping
/// errors and configuration errors can all flow through `?` while keeping
/// the Send + Sync bounds required in async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Loading playlist {}...", name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Added {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the command-line layer. Library code returns errors to the
/// caller instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Playlist {} not found", name);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
