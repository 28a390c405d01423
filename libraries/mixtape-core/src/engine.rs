//! Change application engine
//!
//! Applies an ordered [`ChangeList`] against a [`Catalog`], keeping the
//! [`LookupIndex`] in step. Invalid or inapplicable requests are logged
//! through the [`LogSink`] and skipped; the batch always runs to the end.
//!
//! Every mutation writes the catalog and the index together, and the
//! catalog is only reachable through `&self` accessors while the engine
//! owns it.

use crate::index::LookupIndex;
use crate::log::LogSink;
use crate::types::{Catalog, ChangeKind, ChangeList, ChangeRequest, Playlist};
use std::collections::HashSet;

const ADD_PLAYLIST: &str = "[AddPlaylist] ";
const REMOVE_PLAYLIST: &str = "[RemovePlaylist] ";
const ADD_SONGS: &str = "[AddSongToPlaylist] ";
const UNKNOWN_CHANGE: &str = "[UnknownChange] ";

/// What happened to one change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new playlist was appended
    Added,
    /// A playlist was removed
    Removed,
    /// The target playlist exists; zero or more songs were appended
    Amended,
    /// The request failed validation and changed nothing
    Skipped,
    /// The change kind is not recognized
    Unrecognized,
}

/// Per-outcome request counts for one `apply` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub added: usize,
    pub removed: usize,
    pub amended: usize,
    pub skipped: usize,
    pub unrecognized: usize,
}

impl ApplySummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Added => self.added += 1,
            Outcome::Removed => self.removed += 1,
            Outcome::Amended => self.amended += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Unrecognized => self.unrecognized += 1,
        }
    }

    /// Number of requests processed
    pub fn total(&self) -> usize {
        self.added + self.removed + self.amended + self.skipped + self.unrecognized
    }
}

/// Owns a catalog and its lookup index and applies changes to both
pub struct ChangeEngine<S: LogSink> {
    catalog: Catalog,
    index: LookupIndex,
    sink: S,
    /// Debug builds re-derive the index after each request; disabled when
    /// the trusted input already repeats a playlist ID.
    check_coherence: bool,
}

impl<S: LogSink> ChangeEngine<S> {
    /// Take ownership of `catalog` and build its index
    pub fn new(catalog: Catalog, sink: S) -> Self {
        let index = LookupIndex::build(&catalog);
        let check_coherence =
            cfg!(debug_assertions) && index.playlist_count() == catalog.playlists.len();
        Self {
            catalog,
            index,
            sink,
            check_coherence,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &LookupIndex {
        &self.index
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    pub fn into_parts(self) -> (Catalog, S) {
        (self.catalog, self.sink)
    }

    /// True when the maintained index equals one re-derived from the catalog
    pub fn is_coherent(&self) -> bool {
        LookupIndex::build(&self.catalog) == self.index
    }

    /// Apply every request in list order
    ///
    /// The effect of each request is visible to the next one. Never fails:
    /// requests that do not validate are logged and skipped.
    pub fn apply(&mut self, changes: &ChangeList) -> ApplySummary {
        let mut summary = ApplySummary::default();
        for change in &changes.playlist_changes {
            let outcome = self.apply_one(change);
            summary.record(outcome);
            if self.check_coherence {
                debug_assert!(self.is_coherent(), "lookup index drifted from catalog");
            }
        }
        summary
    }

    /// Apply a single request
    pub fn apply_one(&mut self, change: &ChangeRequest) -> Outcome {
        match change.kind {
            ChangeKind::Add => self.add_playlist(&change.playlist),
            ChangeKind::Remove => self.remove_playlist(&change.playlist),
            ChangeKind::AddSongs => self.add_songs_to_playlist(&change.playlist),
            ChangeKind::Unknown => {
                self.sink.set_prefix(UNKNOWN_CHANGE);
                self.sink.log(format_args!(
                    "unrecognized change kind, playlist_id {}, skipping",
                    change.playlist.id
                ));
                Outcome::Unrecognized
            }
        }
    }

    /// Append a new playlist
    ///
    /// The owner must exist, and only songs present in the catalog are kept
    /// (in their given order). A playlist left with no songs is not added.
    fn add_playlist(&mut self, playlist: &Playlist) -> Outcome {
        self.sink.set_prefix(ADD_PLAYLIST);

        let id = &playlist.id;
        if id.is_empty() {
            self.sink.log(format_args!("playlist_id missing, skipping"));
            return Outcome::Skipped;
        }
        if self.index.contains_playlist(id) {
            self.sink
                .log(format_args!("playlist_id {} already exists, skipping", id));
            return Outcome::Skipped;
        }

        let owner = &playlist.owner_user_id;
        if owner.is_empty() {
            self.sink.log(format_args!(
                "user_id missing, from playlist_id {}, skipping",
                id
            ));
            return Outcome::Skipped;
        }
        if !self.index.contains_user(owner) {
            self.sink.log(format_args!(
                "user_id {} not in mixtape, from playlist_id {}, skipping",
                owner, id
            ));
            return Outcome::Skipped;
        }
        if playlist.song_ids.is_empty() {
            self.sink.log(format_args!(
                "playlist_id {} does not contain any songs, skipping",
                id
            ));
            return Outcome::Skipped;
        }

        // Repeated valid songs stay repeated in the sequence; the membership
        // set collapses them.
        let mut song_ids = Vec::with_capacity(playlist.song_ids.len());
        let mut members = HashSet::with_capacity(playlist.song_ids.len());
        for song in &playlist.song_ids {
            if self.index.contains_song(song) {
                members.insert(song.clone());
                song_ids.push(song.clone());
            } else {
                self.sink.log(format_args!(
                    "song_id {} not in mixtape, from playlist_id {}, skipping",
                    song, id
                ));
            }
        }

        if song_ids.is_empty() {
            self.sink.log(format_args!(
                "playlist_id {} does not contain any songs from mixtape, skipping",
                id
            ));
            return Outcome::Skipped;
        }

        let position = self.catalog.playlists.len();
        self.catalog.playlists.push(Playlist {
            id: id.clone(),
            owner_user_id: owner.clone(),
            song_ids,
        });
        self.index.insert_playlist(id.clone(), position, members);

        self.sink.log(format_args!("added playlist_id {}", id));
        Outcome::Added
    }

    /// Remove a playlist by ID
    ///
    /// The last playlist is moved into the vacated slot, so removal is O(1)
    /// and does not preserve playlist order.
    fn remove_playlist(&mut self, playlist: &Playlist) -> Outcome {
        self.sink.set_prefix(REMOVE_PLAYLIST);

        let id = &playlist.id;
        if id.is_empty() {
            self.sink.log(format_args!("playlist_id missing, skipping"));
            return Outcome::Skipped;
        }

        let len = self.catalog.playlists.len();
        let Some(position) = self.index.position_of(id).filter(|&p| p < len) else {
            self.sink
                .log(format_args!("playlist_id {} not found, skipping", id));
            return Outcome::Skipped;
        };

        self.catalog.playlists.swap_remove(position);
        if let Some(moved) = self.catalog.playlists.get(position) {
            self.index.set_position(&moved.id, position);
        }
        self.index.remove_playlist(id);

        self.sink.log(format_args!("removed playlist_id {}", id));
        Outcome::Removed
    }

    /// Append songs to an existing playlist
    ///
    /// The payload's owner is ignored. Songs missing from the catalog or
    /// already in the playlist are skipped one by one.
    fn add_songs_to_playlist(&mut self, playlist: &Playlist) -> Outcome {
        self.sink.set_prefix(ADD_SONGS);

        let id = &playlist.id;
        if id.is_empty() {
            self.sink.log(format_args!("playlist_id missing, skipping"));
            return Outcome::Skipped;
        }

        let target = self
            .index
            .position_of(id)
            .and_then(|position| self.catalog.playlists.get_mut(position));
        let Some(target) = target else {
            self.sink
                .log(format_args!("playlist_id {} not found, skipping", id));
            return Outcome::Skipped;
        };

        for song in &playlist.song_ids {
            if !self.index.contains_song(song) {
                self.sink.log(format_args!(
                    "song_id {} not in mixtape, not added to playlist_id {}, skipping",
                    song, id
                ));
                continue;
            }
            if !self.index.insert_member(id, song.clone()) {
                self.sink.log(format_args!(
                    "song_id {} already in playlist_id {}, skipping",
                    song, id
                ));
                continue;
            }

            target.song_ids.push(song.clone());
            self.sink
                .log(format_args!("added song_id {} to playlist_id {}", song, id));
        }

        Outcome::Amended
    }
}
