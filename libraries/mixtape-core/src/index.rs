//! Constant-time lookup index over a catalog
//!
//! The index shadows the catalog: user and song presence, each playlist's
//! position in `Catalog::playlists`, and each playlist's song membership.
//! It is built once from a catalog and then kept in step by the engine,
//! which writes the catalog and the index together on every mutation.

use crate::types::{Catalog, PlaylistId, SongId, UserId};
use std::collections::{HashMap, HashSet};

/// Secondary indices derived from a [`Catalog`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupIndex {
    users: HashSet<UserId>,
    songs: HashSet<SongId>,
    playlist_positions: HashMap<PlaylistId, usize>,
    playlist_members: HashMap<PlaylistId, HashSet<SongId>>,
}

impl LookupIndex {
    /// Build the index with one linear pass over each sequence
    ///
    /// If the trusted input repeats a playlist ID, the last occurrence
    /// wins the position entry and membership sets are merged.
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = Self {
            users: catalog.users.iter().map(|u| u.id.clone()).collect(),
            songs: catalog.songs.iter().map(|s| s.id.clone()).collect(),
            playlist_positions: HashMap::with_capacity(catalog.playlists.len()),
            playlist_members: HashMap::with_capacity(catalog.playlists.len()),
        };

        for (position, playlist) in catalog.playlists.iter().enumerate() {
            index
                .playlist_positions
                .insert(playlist.id.clone(), position);
            index
                .playlist_members
                .entry(playlist.id.clone())
                .or_default()
                .extend(playlist.song_ids.iter().cloned());
        }

        index
    }

    pub fn contains_user(&self, id: &UserId) -> bool {
        self.users.contains(id)
    }

    pub fn contains_song(&self, id: &SongId) -> bool {
        self.songs.contains(id)
    }

    pub fn contains_playlist(&self, id: &PlaylistId) -> bool {
        self.playlist_positions.contains_key(id)
    }

    /// Position of the playlist in `Catalog::playlists`
    pub fn position_of(&self, id: &PlaylistId) -> Option<usize> {
        self.playlist_positions.get(id).copied()
    }

    /// True when `song` is already a member of playlist `id`
    pub fn playlist_contains(&self, id: &PlaylistId, song: &SongId) -> bool {
        self.playlist_members
            .get(id)
            .is_some_and(|members| members.contains(song))
    }

    /// Number of distinct songs in playlist `id`
    pub fn playlist_len(&self, id: &PlaylistId) -> Option<usize> {
        self.playlist_members.get(id).map(HashSet::len)
    }

    /// Number of indexed playlists
    pub fn playlist_count(&self) -> usize {
        self.playlist_positions.len()
    }

    pub(crate) fn insert_playlist(
        &mut self,
        id: PlaylistId,
        position: usize,
        members: HashSet<SongId>,
    ) {
        self.playlist_positions.insert(id.clone(), position);
        self.playlist_members.insert(id, members);
    }

    pub(crate) fn set_position(&mut self, id: &PlaylistId, position: usize) {
        if let Some(slot) = self.playlist_positions.get_mut(id) {
            *slot = position;
        }
    }

    pub(crate) fn remove_playlist(&mut self, id: &PlaylistId) {
        self.playlist_positions.remove(id);
        self.playlist_members.remove(id);
    }

    /// Record `song` as a member of playlist `id`; false if it already was
    pub(crate) fn insert_member(&mut self, id: &PlaylistId, song: SongId) -> bool {
        self.playlist_members
            .entry(id.clone())
            .or_default()
            .insert(song)
    }
}
