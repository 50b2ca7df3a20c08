//! Session facade over a Spotify client.
//!
//! [`Session`] is a cheap, cloneable handle around any [`SpotifyApi`]
//! implementation. It adds the conveniences the raw client lacks and hands
//! every payload to the entity mappers. Playlists keep a clone of the
//! session they were resolved through.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    Res, mapping,
    models::{Playlist, Track},
    spotify::SpotifyApi,
    types::Payload,
};

pub const DEFAULT_SEARCH_TYPE: &str = "track";
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

#[derive(Clone)]
pub struct Session {
    client: Arc<dyn SpotifyApi>,
}

impl Session {
    pub fn new(client: Arc<dyn SpotifyApi>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &dyn SpotifyApi {
        self.client.as_ref()
    }

    /// Finds one of the current user's playlists by name or by id.
    ///
    /// Only the first page of playlists is looked at. A name match wins over
    /// an id match; among playlists sharing a name the last one listed wins.
    /// Returns `None` when the user has no playlists or nothing matches.
    ///
    /// The returned playlist has all of its tracks loaded, which may take
    /// several requests.
    pub async fn resolve_playlist(&self, identifier: &str) -> Res<Option<Playlist>> {
        let response = self.client.current_user_playlists().await?;
        let playlists = mapping::objects_or_empty(&response, "items")?;
        if playlists.is_empty() {
            return Ok(None);
        }

        let names = index_by(&playlists, "name");
        let ids = index_by(&playlists, "id");

        match names.get(identifier).or_else(|| ids.get(identifier)) {
            Some(payload) => Ok(Some(Playlist::from_payload(payload, self).await?)),
            None => Ok(None),
        }
    }

    /// Returns the most recently played tracks, newest first, with
    /// `played_at` set.
    pub async fn get_history(&self) -> Res<Vec<Track>> {
        let response = self.client.current_user_recently_played().await?;
        let tracks = mapping::objects_or_empty(&response, "items")?
            .iter()
            .map(Track::from_history)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tracks)
    }

    /// Searches the catalog and returns the best match, if there is one.
    pub async fn track_search(&self, query: &str, kind: &str, limit: u32) -> Res<Option<Track>> {
        let response = self.client.search(query, kind, limit).await?;
        let results = mapping::object_or_empty(&response, "tracks")?;

        match mapping::objects_or_empty(&results, "items")?.first() {
            Some(first) => Ok(Some(Track::from_payload(first)?)),
            None => Ok(None),
        }
    }

    /// [`Session::track_search`] with the default type and limit.
    pub async fn track_search_default(&self, query: &str) -> Res<Option<Track>> {
        self.track_search(query, DEFAULT_SEARCH_TYPE, DEFAULT_SEARCH_LIMIT)
            .await
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

fn index_by<'a>(playlists: &'a [Payload], field: &str) -> HashMap<&'a str, &'a Payload> {
    playlists
        .iter()
        .filter_map(|p| p.get(field).and_then(|v| v.as_str()).map(|key| (key, p)))
        .collect()
}
