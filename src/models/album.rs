use std::{
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    mapping::{self, MappingError},
    types::Payload,
};

use super::{Artist, Image};

#[derive(Debug, Clone, Default)]
pub struct Album {
    pub name: String,
    pub id: String,
    pub uri: String,
    pub artists: Vec<Artist>,
    pub track_count: u64,
    pub urls: BTreeMap<String, String>,
    pub href: String,
    /// As reported by Spotify; may be just a year or year and month.
    pub release_date: String,
    pub images: Vec<Image>,
}

impl Album {
    pub fn from_payload(payload: &Payload) -> Result<Self, MappingError> {
        Ok(Self {
            name: mapping::required_str(payload, "name")?,
            id: mapping::required_str(payload, "id")?,
            uri: mapping::required_str(payload, "uri")?,
            artists: super::artists(payload)?,
            track_count: mapping::u64_or(payload, "total_tracks", 0)?,
            urls: mapping::external_urls(payload)?,
            href: mapping::string_or(payload, "href", "")?,
            release_date: mapping::string_or(payload, "release_date", "")?,
            images: super::images(payload)?,
        })
    }

    /// Like [`Album::from_payload`], but an empty payload yields a default
    /// album instead of an error.
    pub fn from_nested(payload: &Payload) -> Result<Self, MappingError> {
        if payload.is_empty() {
            return Ok(Self::default());
        }
        Self::from_payload(payload)
    }
}

impl PartialEq for Album {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Album {}

impl Hash for Album {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, super::join_names(&self.artists))
    }
}
