//! # Spotify Integration Module
//!
//! This module is the boundary between myspot and the Spotify Web API.
//!
//! ## Architecture
//!
//! ```text
//! Session facade, Playlist
//!          ↓
//! SpotifyApi (capability set)
//!          ↓
//! WebClient (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Credential bootstrap: the app-only client-credentials token
//!   and the user-scoped token backed by the on-disk token cache, falling back
//!   to an interactive authorization-code flow with PKCE.
//! - [`client`] - [`WebClient`], the HTTP implementation of [`SpotifyApi`].
//!
//! ## The `SpotifyApi` seam
//!
//! Everything above this module talks to Spotify through the [`SpotifyApi`]
//! trait and receives raw JSON objects back; turning them into entities is
//! the job of [`crate::models`]. Swapping the implementation (for example an
//! in-memory fake in tests) needs no change anywhere else.
//!
//! ## Error Handling
//!
//! Remote failures are not caught here. Network errors and non-success
//! statuses (expired tokens, rate limits, missing playlists) are returned as
//! they are and travel unchanged to the caller. There is no retry and no
//! backoff.
//!
//! ## Sequencing
//!
//! Every call is awaited before the next one is issued; nothing in this
//! module spawns work for API requests.

pub mod auth;
pub mod client;

pub use client::WebClient;

use async_trait::async_trait;

use crate::{Res, types::Payload};

/// The subset of the Spotify Web API used by myspot.
///
/// Each method returns the decoded JSON body of the response.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// One page of the current user's playlists (`GET /me/playlists`).
    async fn current_user_playlists(&self) -> Res<Payload>;

    /// One page of playlist items starting at `offset`
    /// (`GET /playlists/{id}/tracks`).
    async fn playlist_tracks(&self, playlist_id: &str, offset: u64) -> Res<Payload>;

    /// Appends tracks to a playlist (`POST /playlists/{id}/tracks`).
    async fn playlist_add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Res<Payload>;

    /// The most recent page of the play history
    /// (`GET /me/player/recently-played`).
    async fn current_user_recently_played(&self) -> Res<Payload>;

    /// Catalog search (`GET /search`).
    async fn search(&self, query: &str, kind: &str, limit: u32) -> Res<Payload>;
}
