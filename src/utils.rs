use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{
    models::{self, Track},
    types::{HistoryTableRow, TrackTableRow},
};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Spotify URI of a track id, as the add-tracks endpoint expects it.
pub fn track_uri(id: &str) -> String {
    if id.starts_with("spotify:") {
        id.to_string()
    } else {
        format!("spotify:track:{id}")
    }
}

/// Formats milliseconds as `m:ss`, or `h:mm:ss` from one hour on.
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    let (hours, mins, secs) = (total_secs / 3600, (total_secs % 3600) / 60, total_secs % 60);
    if hours > 0 {
        format!("{hours}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}

pub fn artist_names(track: &Track) -> String {
    models::join_names(&track.artists)
}

pub fn track_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: artist_names(t),
            album: t.album.name.clone(),
            duration: format_duration(t.duration),
        })
        .collect()
}

pub fn history_rows(tracks: &[Track]) -> Vec<HistoryTableRow> {
    tracks
        .iter()
        .map(|t| HistoryTableRow {
            played_at: t.played_at.clone().unwrap_or_default(),
            name: t.name.clone(),
            artists: artist_names(t),
        })
        .collect()
}
