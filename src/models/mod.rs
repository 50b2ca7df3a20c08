//! # Entity Models
//!
//! Snapshots of Spotify objects built from Web API payloads. Each entity has
//! a `from_payload` constructor that validates the identity fields (`name`,
//! `id`, `uri`, plus `duration_ms` for tracks) and fills every other field
//! with a default when the payload omits it.
//!
//! Entities are identified by their Spotify id alone: two values with the
//! same id compare equal no matter how much of the rest differs. Nothing is
//! cached or deduplicated across calls; every fetch builds fresh values.
//!
//! [`Playlist`] is the exception to "passive": it carries the session it was
//! loaded through, eagerly loads its tracks on construction and can push new
//! tracks back to the service.

mod album;
mod artist;
mod playlist;
mod track;

pub use album::Album;
pub use artist::Artist;
pub use playlist::{ADD_CHUNK_SIZE, PAGE_SIZE, Playlist};
pub use track::Track;

use serde::{Deserialize, Serialize};

use crate::{
    mapping::{self, MappingError},
    types::Payload,
};

/// Cover art reference. Spotify leaves the dimensions out for some images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u64>,
    pub height: Option<u64>,
}

impl Image {
    pub fn from_payload(payload: &Payload) -> Result<Self, MappingError> {
        Ok(Self {
            url: mapping::string_or(payload, "url", "")?,
            width: mapping::optional_u64(payload, "width")?,
            height: mapping::optional_u64(payload, "height")?,
        })
    }
}

pub(crate) fn images(payload: &Payload) -> Result<Vec<Image>, MappingError> {
    mapping::objects_or_empty(payload, "images")?
        .iter()
        .map(Image::from_payload)
        .collect()
}

pub(crate) fn artists(payload: &Payload) -> Result<Vec<Artist>, MappingError> {
    mapping::objects_or_empty(payload, "artists")?
        .iter()
        .map(Artist::from_nested)
        .collect()
}

pub(crate) fn join_names(artists: &[Artist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
