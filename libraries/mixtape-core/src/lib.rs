//! Mixtape Core
//!
//! Catalog model and change application engine for Mixtape.
//!
//! A [`Catalog`] holds users, songs, and playlists. A [`ChangeEngine`] owns
//! a catalog together with its [`LookupIndex`] and applies a [`ChangeList`]
//! to it, request by request, keeping every playlist pointing at existing
//! users and songs. Requests that do not validate are reported through a
//! [`LogSink`] and skipped.
//!
//! # Example
//!
//! ```rust
//! use mixtape_core::{BufferSink, Catalog, ChangeEngine, ChangeList, ChangeRequest};
//! use mixtape_core::{Playlist, Song, User};
//!
//! let catalog = Catalog::new(
//!     vec![User::new("user_1", "Albin Jaye")],
//!     vec![Song::new("song_1", "Camila Cabello", "Never Be the Same")],
//!     Vec::new(),
//! );
//!
//! let mut engine = ChangeEngine::new(catalog, BufferSink::new());
//! let changes = ChangeList::new(vec![ChangeRequest::add(Playlist::new(
//!     "playlist_1",
//!     "user_1",
//!     ["song_1", "song_x"],
//! ))]);
//!
//! let summary = engine.apply(&changes);
//! assert_eq!(summary.added, 1);
//! assert_eq!(engine.catalog().playlists[0].song_ids.len(), 1);
//! assert!(engine.sink().contains("song_id song_x not in mixtape"));
//! ```

#![forbid(unsafe_code)]

pub mod codec;
pub mod engine;
pub mod error;
pub mod index;
pub mod log;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use engine::{ApplySummary, ChangeEngine, Outcome};
pub use error::{MixtapeError, Result};
pub use index::LookupIndex;
pub use log::{BufferSink, LogSink, NoopSink, TracingSink};
pub use traits::{new_collection, Collection};

pub use types::{
    Catalog, ChangeKind, ChangeList, ChangeRequest, Playlist, PlaylistId, Song, SongId, User,
    UserId,
};
