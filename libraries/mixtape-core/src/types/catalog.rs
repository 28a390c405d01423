/// Catalog aggregate
use crate::types::{null_as_empty, Playlist, Song, User};
use serde::{Deserialize, Serialize};

/// Top-level aggregate of users, songs, and playlists
///
/// Users and songs are read-only once loaded. Playlists are only changed
/// through [`crate::ChangeEngine`], which may reorder them on removal.
/// Fields are declared in output key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub users: Vec<User>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub playlists: Vec<Playlist>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub songs: Vec<Song>,
}

impl Catalog {
    /// Create a catalog from decoded parts
    pub fn new(users: Vec<User>, songs: Vec<Song>, playlists: Vec<Playlist>) -> Self {
        Self {
            users,
            playlists,
            songs,
        }
    }
}
