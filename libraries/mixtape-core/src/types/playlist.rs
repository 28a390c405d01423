/// Playlist domain type
use crate::types::{null_as_empty, PlaylistId, SongId, UserId};
use serde::{Deserialize, Serialize};

/// Playlist owned by one user, referencing songs by ID
///
/// The same shape is used as the payload of a change request, where any
/// field may be missing and decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    #[serde(default)]
    pub id: PlaylistId,

    /// Owner user ID
    #[serde(default, rename = "user_id")]
    pub owner_user_id: UserId,

    /// Songs in play order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub song_ids: Vec<SongId>,
}

impl Playlist {
    /// Create a new playlist
    pub fn new<I, S>(id: impl Into<PlaylistId>, owner_user_id: impl Into<UserId>, song_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SongId>,
    {
        Self {
            id: id.into(),
            owner_user_id: owner_user_id.into(),
            song_ids: song_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Playlist payload that carries only an ID (as used by remove requests)
    pub fn with_id(id: impl Into<PlaylistId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}
