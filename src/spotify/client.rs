use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::{Res, config, types::Payload, utils};

use super::SpotifyApi;

const PLAYLISTS_LIMIT: u32 = 50;
const PLAYLIST_ITEMS_LIMIT: u64 = 100;
const HISTORY_LIMIT: u32 = 50;

/// Bearer-token client for the Spotify Web API.
pub struct WebClient {
    http: Client,
    token: String,
    api_url: String,
}

impl WebClient {
    /// Creates a client against the configured API base URL.
    pub fn new(token: String) -> Self {
        Self::with_api_url(token, config::spotify_apiurl())
    }

    pub fn with_api_url(token: String, api_url: String) -> Self {
        Self {
            http: Client::new(),
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{uri}{path}", uri = self.api_url)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Res<Payload> {
        let api_url = self.endpoint(path);
        tracing::debug!(url = %api_url, "GET");

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Payload>().await?)
    }
}

#[async_trait]
impl SpotifyApi for WebClient {
    async fn current_user_playlists(&self) -> Res<Payload> {
        self.get("/me/playlists", &[("limit", PLAYLISTS_LIMIT.to_string())])
            .await
    }

    async fn playlist_tracks(&self, playlist_id: &str, offset: u64) -> Res<Payload> {
        self.get(
            &format!("/playlists/{playlist_id}/tracks"),
            &[
                ("limit", PLAYLIST_ITEMS_LIMIT.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }

    async fn playlist_add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Res<Payload> {
        let api_url = self.endpoint(&format!("/playlists/{playlist_id}/tracks"));
        let uris: Vec<String> = track_ids.iter().map(|id| utils::track_uri(id)).collect();
        tracing::debug!(url = %api_url, count = uris.len(), "POST");

        let response = self
            .http
            .post(&api_url)
            .bearer_auth(&self.token)
            .json(&json!({ "uris": uris }))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Payload>().await?)
    }

    async fn current_user_recently_played(&self) -> Res<Payload> {
        self.get(
            "/me/player/recently-played",
            &[("limit", HISTORY_LIMIT.to_string())],
        )
        .await
    }

    async fn search(&self, query: &str, kind: &str, limit: u32) -> Res<Payload> {
        self.get(
            "/search",
            &[
                ("q", query.to_string()),
                ("type", kind.to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }
}
