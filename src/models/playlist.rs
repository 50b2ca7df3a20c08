use std::{
    collections::{BTreeMap, HashSet},
    fmt,
};

use crate::{
    Res,
    mapping::{self, MappingError},
    session::Session,
    types::Payload,
};

use super::{Image, Track};

/// Number of playlist items requested per page while loading tracks.
pub const PAGE_SIZE: u64 = 100;

/// Maximum number of tracks sent in a single add request.
pub const ADD_CHUNK_SIZE: usize = 100;

/// A playlist of the current user, with all of its tracks loaded.
///
/// `track_count` and `tracks` are a snapshot taken when the playlist was
/// built. [`Playlist::add_tracks`] changes the remote playlist only; resolve
/// the playlist again to observe the new state.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub name: String,
    pub id: String,
    pub description: String,
    pub uri: String,
    /// Server-reported `tracks.total` at load time.
    pub track_count: u64,
    pub collaborative: bool,
    pub urls: BTreeMap<String, String>,
    pub href: String,
    pub images: Vec<Image>,
    /// Raw owner object.
    pub owner: Payload,
    pub color: Option<String>,
    pub public: bool,
    pub snapshot_id: Option<String>,
    pub tracks: Vec<Track>,
    session: Session,
}

impl Playlist {
    /// Builds a playlist from its payload and loads every track through
    /// `session`.
    ///
    /// Fails when a required field is missing or any page fetch fails; no
    /// partially loaded playlist is ever returned.
    pub async fn from_payload(payload: &Payload, session: &Session) -> Res<Self> {
        let mut playlist = Self::from_summary(payload, session)?;
        playlist.tracks = playlist.get_tracks().await?;
        Ok(playlist)
    }

    fn from_summary(payload: &Payload, session: &Session) -> Result<Self, MappingError> {
        mapping::require(payload, "description")?;
        let tracks = mapping::required_object(payload, "tracks")?;

        Ok(Self {
            name: mapping::required_str(payload, "name")?,
            id: mapping::required_str(payload, "id")?,
            description: mapping::string_or(payload, "description", "")?,
            uri: mapping::required_str(payload, "uri")?,
            track_count: mapping::u64_or(&tracks, "total", 0)?,
            collaborative: mapping::bool_or(payload, "collaborative", false)?,
            urls: mapping::external_urls(payload)?,
            href: mapping::string_or(payload, "href", "")?,
            images: super::images(payload)?,
            owner: mapping::object_or_empty(payload, "owner")?,
            color: match mapping::optional_str(payload, "color")? {
                Some(color) => Some(color),
                None => mapping::optional_str(payload, "primary_color")?,
            },
            public: mapping::bool_or(payload, "public", false)?,
            snapshot_id: mapping::optional_str(payload, "snapshot_id")?,
            tracks: Vec::new(),
            session: session.clone(),
        })
    }

    /// Fetches all items of the playlist, `PAGE_SIZE` at a time, up to the
    /// reported `track_count`.
    pub async fn get_tracks(&self) -> Res<Vec<Track>> {
        let mut items = Vec::new();
        let mut offset = 0;
        while offset < self.track_count {
            let page = self
                .session
                .client()
                .playlist_tracks(&self.id, offset)
                .await?;
            items.extend(mapping::objects_or_empty(&page, "items")?);
            offset += PAGE_SIZE;
        }
        tracing::debug!(playlist = %self.name, items = items.len(), "Loaded playlist items");

        let mut tracks = Vec::with_capacity(items.len());
        for item in &items {
            tracks.push(Track::from_payload(&mapping::required_object(item, "track")?)?);
        }
        Ok(tracks)
    }

    /// Adds the given tracks that are not in the playlist yet.
    ///
    /// Tracks are sent in input order, in chunks of at most
    /// [`ADD_CHUNK_SIZE`], one request after the other. A failing request
    /// stops the loop; chunks sent before it stay applied. The local
    /// `tracks` and `track_count` are left untouched.
    ///
    /// Returns how many tracks were sent.
    pub async fn add_tracks(&self, tracks: &[Track]) -> Res<usize> {
        let existing: HashSet<&Track> = self.tracks.iter().collect();
        let new_tracks: Vec<&Track> = tracks.iter().filter(|t| !existing.contains(t)).collect();

        tracing::info!("Adding {} tracks to {}.", new_tracks.len(), self.name);
        for chunk in new_tracks.chunks(ADD_CHUNK_SIZE) {
            let ids: Vec<String> = chunk.iter().map(|t| t.id.clone()).collect();
            self.session
                .client()
                .playlist_add_tracks(&self.id, &ids)
                .await?;
        }

        Ok(new_tracks.len())
    }
}

impl PartialEq for Playlist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Playlist {}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.description)
    }
}
