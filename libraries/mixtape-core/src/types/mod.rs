mod catalog;
mod change;
mod ids;
mod playlist;
mod song;
mod user;

pub use catalog::Catalog;
pub use change::{ChangeKind, ChangeList, ChangeRequest};
pub use ids::{PlaylistId, SongId, UserId};
pub use playlist::Playlist;
pub use song::Song;
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Decode a JSON `null` sequence as an empty one
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
