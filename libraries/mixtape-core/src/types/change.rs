/// Change request types
use crate::types::{null_as_empty, Playlist};
use serde::{Deserialize, Serialize};

/// Kind of mutation a change request asks for
///
/// Any unrecognized kind decodes as [`ChangeKind::Unknown`] so that one bad
/// entry does not reject the whole change list. A missing kind is unknown too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Create a playlist
    Add,
    /// Delete a playlist
    Remove,
    /// Append songs to an existing playlist
    AddSongs,
    /// Anything else
    #[default]
    #[serde(other)]
    Unknown,
}

/// One mutation against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequest {
    #[serde(default, rename = "id")]
    pub kind: ChangeKind,

    #[serde(default)]
    pub playlist: Playlist,
}

impl ChangeRequest {
    /// Request to add `playlist`
    pub fn add(playlist: Playlist) -> Self {
        Self {
            kind: ChangeKind::Add,
            playlist,
        }
    }

    /// Request to remove `playlist` (only its ID is used)
    pub fn remove(playlist: Playlist) -> Self {
        Self {
            kind: ChangeKind::Remove,
            playlist,
        }
    }

    /// Request to append the songs of `playlist` to the playlist with its ID
    pub fn add_songs(playlist: Playlist) -> Self {
        Self {
            kind: ChangeKind::AddSongs,
            playlist,
        }
    }
}

/// Ordered list of change requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub playlist_changes: Vec<ChangeRequest>,
}

impl ChangeList {
    /// Create a change list
    pub fn new(playlist_changes: Vec<ChangeRequest>) -> Self {
        Self { playlist_changes }
    }

    pub fn len(&self) -> usize {
        self.playlist_changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlist_changes.is_empty()
    }
}

impl FromIterator<ChangeRequest> for ChangeList {
    fn from_iter<T: IntoIterator<Item = ChangeRequest>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_kinds_decode_from_wire_names() {
        let list: ChangeList = serde_json::from_str(
            r#"{"playlist_changes":[
                {"id":"add","playlist":{"id":"p1","user_id":"u1","song_ids":["s1"]}},
                {"id":"remove","playlist":{"id":"p1"}},
                {"id":"add_songs","playlist":{"id":"p2","song_ids":["s2"]}}
            ]}"#,
        )
        .unwrap();

        let kinds: Vec<ChangeKind> = list.playlist_changes.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ChangeKind::Add, ChangeKind::Remove, ChangeKind::AddSongs]
        );
        assert_eq!(list.playlist_changes[1].playlist, Playlist::with_id("p1"));
    }

    #[test]
    fn unrecognized_kind_decodes_as_unknown() {
        let change: ChangeRequest =
            serde_json::from_str(r#"{"id":"rename","playlist":{"id":"p1"}}"#).unwrap();
        assert_eq!(change.kind, ChangeKind::Unknown);

        let change: ChangeRequest = serde_json::from_str(r#"{"playlist":{"id":"p1"}}"#).unwrap();
        assert_eq!(change.kind, ChangeKind::Unknown);
    }

    #[test]
    fn missing_changes_decode_as_empty_list() {
        let list: ChangeList = serde_json::from_str("{}").unwrap();
        assert!(list.is_empty());
    }
}
