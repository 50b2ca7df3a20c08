#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use myspot::{Res, spotify::SpotifyApi, types::Payload};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Playlists,
    PlaylistTracks { playlist_id: String, offset: u64 },
    AddTracks { playlist_id: String, track_ids: Vec<String> },
    RecentlyPlayed,
    Search { query: String, kind: String, limit: u32 },
}

/// In-memory stand-in for the Web API that records every call.
#[derive(Default)]
pub struct FakeClient {
    pub playlists: Vec<Value>,
    /// Items of every playlist, served page by page.
    pub items: Vec<(String, Vec<Value>)>,
    pub history: Vec<Value>,
    pub search_results: Vec<Value>,
    /// Zero-based index of the add request that should fail.
    pub fail_add_at: Option<usize>,
    pub fail_page_at: Option<u64>,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeClient {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn add_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::AddTracks { track_ids, .. } => Some(track_ids),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SpotifyApi for FakeClient {
    async fn current_user_playlists(&self) -> Res<Payload> {
        self.record(Call::Playlists);
        Ok(object(json!({ "items": self.playlists })))
    }

    async fn playlist_tracks(&self, playlist_id: &str, offset: u64) -> Res<Payload> {
        self.record(Call::PlaylistTracks {
            playlist_id: playlist_id.to_string(),
            offset,
        });
        if self.fail_page_at == Some(offset) {
            return Err("502 Bad Gateway".into());
        }
        let items: Vec<Value> = self
            .items
            .iter()
            .find(|(id, _)| id == playlist_id)
            .map(|(_, items)| items.iter().skip(offset as usize).take(100).cloned().collect())
            .unwrap_or_default();
        Ok(object(json!({ "items": items, "offset": offset })))
    }

    async fn playlist_add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Res<Payload> {
        let attempt = self.add_calls().len();
        self.record(Call::AddTracks {
            playlist_id: playlist_id.to_string(),
            track_ids: track_ids.to_vec(),
        });
        if self.fail_add_at == Some(attempt) {
            return Err("429 Too Many Requests".into());
        }
        Ok(object(json!({ "snapshot_id": format!("snap-{attempt}") })))
    }

    async fn current_user_recently_played(&self) -> Res<Payload> {
        self.record(Call::RecentlyPlayed);
        Ok(object(json!({ "items": self.history })))
    }

    async fn search(&self, query: &str, kind: &str, limit: u32) -> Res<Payload> {
        self.record(Call::Search {
            query: query.to_string(),
            kind: kind.to_string(),
            limit,
        });
        Ok(object(json!({ "tracks": { "items": self.search_results } })))
    }
}

pub fn object(value: Value) -> Payload {
    match value {
        Value::Object(o) => o,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn track_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "uri": format!("spotify:track:{id}"),
        "duration_ms": 180_000,
        "artists": [{ "id": "ar1", "name": "Artist One", "uri": "spotify:artist:ar1" }],
        "album": { "id": "al1", "name": "Album One", "uri": "spotify:album:al1" }
    })
}

pub fn playlist_json(id: &str, name: &str, total: u64) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "uri": format!("spotify:playlist:{id}"),
        "tracks": { "href": "https://api.example/tracks", "total": total }
    })
}

/// `count` playlist items wrapping tracks `t0`, `t1`, ...
pub fn items_json(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({ "added_at": "2024-01-01T00:00:00Z", "track": track_json(&format!("t{i}"), &format!("Song {i}")) }))
        .collect()
}
