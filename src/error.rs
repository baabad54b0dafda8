//! Error types for the playlist store

use std::path::PathBuf;

/// Errors produced by the playlist store
#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    /// Title was empty (or whitespace only) after normalization
    #[error("Song title must not be empty")]
    EmptyTitle,

    /// Every id up to the counter's limit has been handed out
    #[error("No song ids left to assign")]
    IdsExhausted,

    /// The playlist file could not be opened, read or written
    #[error("Persistence error on {path:?}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlaylistError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
