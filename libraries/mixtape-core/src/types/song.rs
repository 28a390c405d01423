/// Song domain type
use crate::types::SongId;
use serde::{Deserialize, Serialize};

/// Song available in the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    #[serde(default)]
    pub id: SongId,

    /// Performing artist
    #[serde(default)]
    pub artist: String,

    /// Song title
    #[serde(default)]
    pub title: String,
}

impl Song {
    /// Create a new song
    pub fn new(id: impl Into<SongId>, artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            artist: artist.into(),
            title: title.into(),
        }
    }
}
