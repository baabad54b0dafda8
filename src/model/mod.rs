//! In-memory playlist model
//!
//! Songs and the ordered collection that owns them. Nothing in here
//! touches the filesystem; see `store` for persistence.

mod playlist;
mod song;

pub use playlist::Playlist;
pub use song::{normalize_title, Song, MAX_TITLE_LEN};
