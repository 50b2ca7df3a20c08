//! # CLI Module
//!
//! User-facing commands of myspot. Each command builds what it needs
//! (token, client, session), calls into the library and renders the result
//! with the console macros and `tabled` tables. Failures end the process
//! through [`crate::error!`].
//!
//! ## Commands
//!
//! - [`auth`] - Runs the user token flow and fills the token cache
//! - [`token`] - Prints an app-only (client-credentials) token
//! - [`playlist`] - Resolves a playlist by name or id and lists its tracks
//! - [`history`] - Lists recently played tracks
//! - [`search`] - Shows the best catalog match for a query
//! - [`add`] - Searches for tracks and adds the matches to a playlist
//!
//! ## Usage
//!
//! ```bash
//! myspot auth
//! myspot playlist "Focus"
//! myspot history
//! myspot search "daft punk around the world"
//! myspot add "Focus" "aphex twin xtal" "boards of canada roygbiv"
//! ```

mod add;
mod auth;
mod history;
mod playlist;
mod search;
mod token;

pub use add::add;
pub use auth::auth;
pub use history::history;
pub use playlist::playlist;
pub use search::search;
pub use token::token;

use std::sync::Arc;

use crate::{
    error,
    session::Session,
    spotify::{self, WebClient},
};

/// Builds a session for the configured user, authenticating when needed.
async fn user_session() -> Session {
    match spotify::auth::get_user_token_from_env().await {
        Ok(token) => Session::new(Arc::new(WebClient::new(token))),
        Err(e) => error!("Failed to get user token. Please run myspot auth\n Error: {}", e),
    }
}
