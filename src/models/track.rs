use std::{
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    mapping::{self, MappingError},
    types::Payload,
};

use super::{Album, Artist};

/// A single track. Only `id` takes part in equality and hashing, so a track
/// from the play history and the same track from a playlist are
/// interchangeable in sets and maps.
#[derive(Debug, Clone)]
pub struct Track {
    pub name: String,
    pub id: String,
    pub uri: String,
    /// Length in milliseconds.
    pub duration: u64,
    pub album: Album,
    pub artists: Vec<Artist>,
    pub disc_number: u64,
    pub explicit: bool,
    pub urls: BTreeMap<String, String>,
    pub href: String,
    pub popularity: u64,
    pub preview: Option<String>,
    pub track_number: u64,
    /// Only set for tracks read from the play history.
    pub played_at: Option<String>,
}

impl Track {
    pub fn from_payload(payload: &Payload) -> Result<Self, MappingError> {
        Ok(Self {
            name: mapping::required_str(payload, "name")?,
            id: mapping::required_str(payload, "id")?,
            uri: mapping::required_str(payload, "uri")?,
            duration: mapping::required_u64(payload, "duration_ms")?,
            album: Album::from_nested(&mapping::object_or_empty(payload, "album")?)?,
            artists: super::artists(payload)?,
            disc_number: mapping::u64_or(payload, "disc_number", 0)?,
            explicit: mapping::bool_or(payload, "explicit", false)?,
            urls: mapping::external_urls(payload)?,
            href: mapping::string_or(payload, "href", "")?,
            popularity: mapping::u64_or(payload, "popularity", 0)?,
            preview: mapping::optional_str(payload, "preview_url")?,
            track_number: mapping::u64_or(payload, "track_number", 0)?,
            played_at: mapping::optional_str(payload, "played_at")?,
        })
    }

    /// Builds a track from a play-history envelope (`{"played_at", "track"}`).
    pub fn from_history(envelope: &Payload) -> Result<Self, MappingError> {
        Self::from_payload(&mapping::merge_envelope(envelope)?)
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.name,
            super::join_names(&self.artists),
            self.album.name
        )
    }
}
