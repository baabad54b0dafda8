//! Store configuration

use std::path::PathBuf;

/// File used when no path is given
pub const DEFAULT_FILE_NAME: &str = "playlist.txt";

/// Configuration for a playlist store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Playlist file location
    pub path: PathBuf,

    /// Rewrite through a temporary file and rename it into place.
    /// Appends always go straight to the file.
    pub atomic_rewrite: bool,
}

impl StoreConfig {
    /// Create a new store configuration
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            atomic_rewrite: false,
        }
    }

    /// Enable or disable rename-into-place rewrites
    pub fn with_atomic_rewrite(mut self, atomic: bool) -> Self {
        self.atomic_rewrite = atomic;
        self
    }
}
