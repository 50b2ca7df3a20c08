//! # API Module
//!
//! HTTP endpoints served by the local server during interactive login.
//!
//! - [`callback`] - Receives the authorization code from Spotify's redirect
//!   and exchanges it, together with the PKCE verifier, for a token.
//! - [`health`] - Reports status and version.
//!
//! Both are plain Axum handlers; see [`crate::server::router`] for wiring.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
