//! Playlist Manager - persistent ordered song list
//!
//! This library keeps an ordered playlist in memory and mirrors it to a
//! tab-separated text file: new songs are appended, any reorder or
//! removal rewrites the file.

pub mod cli;
pub mod error;
pub mod model;
pub mod store;

pub use error::{PlaylistError, Result};
pub use model::{Playlist, Song};
pub use store::{PlaylistStore, StoreConfig};
