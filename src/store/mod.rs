//! Persistent playlist store
//!
//! Couples the in-memory [`Playlist`] with its [`PlaylistFile`]. Every
//! mutation is applied in memory first and then mirrored to disk:
//!
//! - insertions append a single record
//! - removals, moves and clears rewrite the whole file
//!
//! Disk writes are best effort. A failed write is logged and the
//! in-memory change is kept; the running process treats memory as
//! the source of truth.

pub mod config;
mod file;

pub use config::StoreConfig;
pub use file::PlaylistFile;

use crate::error::Result;
use crate::model::{Playlist, Song};

/// Playlist backed by a text file
#[derive(Debug)]
pub struct PlaylistStore {
    playlist: Playlist,
    file: PlaylistFile,
}

impl PlaylistStore {
    /// Load the playlist from disk, or start empty on first run
    pub fn open(config: StoreConfig) -> Result<Self> {
        let file = PlaylistFile::new(config.path, config.atomic_rewrite);
        let playlist = file.load_all()?;

        log::debug!(
            "Opened playlist {:?}: {} songs, next id {}",
            file.path(),
            playlist.len(),
            playlist.next_id()
        );

        Ok(Self { playlist, file })
    }

    /// Add a song at the end of the playlist
    pub fn add_song(&mut self, title: &str) -> Result<Song> {
        let song = self.playlist.insert(title)?;

        if let Err(e) = self.file.append_one(&song) {
            log::error!("Failed to save song #{}: {}", song.id, e);
        }

        log::info!("Added song {}", song);
        Ok(song)
    }

    /// Remove a song by id. Returns false if no such song exists.
    pub fn remove_song(&mut self, id: u32) -> bool {
        match self.playlist.remove_by_id(id) {
            Some(song) => {
                log::info!("Removed song {}", song);
                self.save_all();
                true
            }
            None => {
                log::debug!("Song #{} not found", id);
                false
            }
        }
    }

    /// Move a song one position towards the start
    pub fn move_up(&mut self, id: u32) -> bool {
        let moved = self.playlist.move_up(id);
        if moved {
            log::info!("Moved song #{} up", id);
            self.save_all();
        }
        moved
    }

    /// Move a song one position towards the end
    pub fn move_down(&mut self, id: u32) -> bool {
        let moved = self.playlist.move_down(id);
        if moved {
            log::info!("Moved song #{} down", id);
            self.save_all();
        }
        moved
    }

    /// Remove every song and truncate the file.
    ///
    /// Ids keep counting from where they were; a cleared playlist never
    /// hands out an id it issued before.
    pub fn clear(&mut self) {
        self.playlist.clear();
        log::info!("Cleared playlist");
        self.save_all();
    }

    /// Songs in playback order
    pub fn list_songs(&self) -> &[Song] {
        self.playlist.songs()
    }

    /// Look up a song by id
    pub fn get(&self, id: u32) -> Option<&Song> {
        self.playlist.get(id)
    }

    /// The underlying collection
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    fn save_all(&self) {
        if let Err(e) = self.file.rewrite_all(&self.playlist) {
            log::error!("Failed to save playlist: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn open_in(dir: &TempDir) -> PlaylistStore {
        PlaylistStore::open(StoreConfig::new(dir.path().join("playlist.txt"))).unwrap()
    }

    #[test]
    fn test_add_appends_to_file() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);

        store.add_song("One").unwrap();
        store.add_song("Two\n").unwrap();

        let content = fs::read_to_string(dir.path().join("playlist.txt")).unwrap();
        assert_eq!(content, "1\tOne\n2\tTwo\n");
    }

    #[test]
    fn test_empty_title_does_not_touch_file() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);

        assert!(store.add_song("   ").is_err());
        assert!(!dir.path().join("playlist.txt").exists());
        assert_eq!(store.playlist().next_id(), 1);
    }

    #[test]
    fn test_failed_move_does_not_rewrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("playlist.txt");
        let mut store = open_in(&dir);
        store.add_song("One").unwrap();

        // Hand-edit the file; a no-op move must leave it alone
        fs::write(&path, "1\tOne\nnote to self\n").unwrap();
        assert!(!store.move_up(1));
        assert!(!store.move_down(1));
        assert!(!store.remove_song(5));

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "1\tOne\nnote to self\n"
        );
    }

    #[test]
    fn test_clear_truncates_file() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        store.add_song("One").unwrap();
        store.add_song("Two").unwrap();

        store.clear();

        assert!(store.list_songs().is_empty());
        let content = fs::read_to_string(dir.path().join("playlist.txt")).unwrap();
        assert!(content.is_empty());
        assert_eq!(store.add_song("Three").unwrap().id, 3);
    }
}
