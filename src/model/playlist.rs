use super::song::{normalize_title, Song};
use crate::error::{PlaylistError, Result};

/// Ordered collection of songs in playback order
///
/// Ids come from a counter that only moves forward: removing or
/// clearing songs never makes an id available again.
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Songs in playback order
    songs: Vec<Song>,

    /// Id handed to the next inserted song
    next_id: u32,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self {
            songs: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a playlist from already-validated songs, keeping their order.
    ///
    /// The id counter starts one past the highest id present. If that
    /// id is `u32::MAX` the counter is already exhausted.
    pub fn from_songs(songs: Vec<Song>) -> Self {
        let max_id = songs.iter().map(|s| s.id).max().unwrap_or(0);
        let next_id = max_id.saturating_add(1);
        Self { songs, next_id }
    }

    /// Append a new song at the end and return it
    pub fn insert(&mut self, title: &str) -> Result<Song> {
        let title = normalize_title(title)?;

        // `u32::MAX` is never issued so the counter always stays ahead
        let following = self
            .next_id
            .checked_add(1)
            .ok_or(PlaylistError::IdsExhausted)?;

        let song = Song {
            id: self.next_id,
            title,
        };
        self.next_id = following;
        self.songs.push(song.clone());

        Ok(song)
    }

    /// Remove the song with the given id
    pub fn remove_by_id(&mut self, id: u32) -> Option<Song> {
        let index = self.position(id)?;
        Some(self.songs.remove(index))
    }

    /// Swap a song with its predecessor
    pub fn move_up(&mut self, id: u32) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                self.songs.swap(index - 1, index);
                true
            }
            _ => false,
        }
    }

    /// Swap a song with its successor
    pub fn move_down(&mut self, id: u32) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.songs.len() => {
                self.songs.swap(index, index + 1);
                true
            }
            _ => false,
        }
    }

    /// Remove every song. The id counter is left untouched.
    pub fn clear(&mut self) {
        self.songs.clear();
    }

    /// All songs in playback order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Look up a song by id
    pub fn get(&self, id: u32) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    /// Index of a song in playback order
    pub fn position(&self, id: u32) -> Option<usize> {
        self.songs.iter().position(|s| s.id == id)
    }

    /// Id the next inserted song will receive
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaylistError;

    fn ids(playlist: &Playlist) -> Vec<u32> {
        playlist.songs().iter().map(|s| s.id).collect()
    }

    fn abc() -> Playlist {
        let mut playlist = Playlist::new();
        for title in ["A", "B", "C"] {
            playlist.insert(title).unwrap();
        }
        playlist
    }

    #[test]
    fn test_playlist_creation() {
        let playlist = Playlist::new();
        assert!(playlist.is_empty());
        assert_eq!(playlist.next_id(), 1);
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let mut playlist = Playlist::new();
        let mut last = 0;
        for i in 0..50 {
            let song = playlist.insert(&format!("Song {}", i)).unwrap();
            assert!(song.id > last);
            last = song.id;
        }
        assert_eq!(playlist.len(), 50);
        assert_eq!(playlist.songs().last().unwrap().title, "Song 49");
    }

    #[test]
    fn test_insert_empty_title_leaves_state_alone() {
        let mut playlist = abc();
        let result = playlist.insert("  ");
        assert!(matches!(result, Err(PlaylistError::EmptyTitle)));
        assert_eq!(playlist.len(), 3);
        assert_eq!(playlist.next_id(), 4);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut playlist = abc();
        let removed = playlist.remove_by_id(2).unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(ids(&playlist), vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut playlist = abc();
        let before = playlist.songs().to_vec();
        assert!(playlist.remove_by_id(42).is_none());
        assert_eq!(playlist.songs(), before.as_slice());
    }

    #[test]
    fn test_move_up_and_down_restore_order() {
        let mut playlist = abc();
        assert!(playlist.move_up(2));
        assert_eq!(ids(&playlist), vec![2, 1, 3]);
        assert!(playlist.move_down(2));
        assert_eq!(ids(&playlist), vec![1, 2, 3]);

        assert!(playlist.move_down(1));
        assert!(playlist.move_up(1));
        assert_eq!(ids(&playlist), vec![1, 2, 3]);
    }

    #[test]
    fn test_move_at_boundaries() {
        let mut playlist = abc();
        assert!(!playlist.move_up(1));
        assert!(!playlist.move_down(3));
        assert!(!playlist.move_up(99));
        assert!(!playlist.move_down(99));
        assert_eq!(ids(&playlist), vec![1, 2, 3]);
    }

    #[test]
    fn test_single_song_cannot_move() {
        let mut playlist = Playlist::new();
        playlist.insert("Only").unwrap();
        assert!(!playlist.move_up(1));
        assert!(!playlist.move_down(1));
    }

    #[test]
    fn test_clear_keeps_counter() {
        let mut playlist = abc();
        playlist.clear();
        assert!(playlist.is_empty());
        let song = playlist.insert("D").unwrap();
        assert_eq!(song.id, 4);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut playlist = abc();
        playlist.remove_by_id(3);
        assert_eq!(playlist.insert("D").unwrap().id, 4);
    }

    #[test]
    fn test_from_songs_seeds_counter() {
        let playlist = Playlist::from_songs(vec![
            Song {
                id: 5,
                title: "E".to_string(),
            },
            Song {
                id: 2,
                title: "B".to_string(),
            },
        ]);
        assert_eq!(ids(&playlist), vec![5, 2]);
        assert_eq!(playlist.next_id(), 6);

        assert_eq!(Playlist::from_songs(Vec::new()).next_id(), 1);
    }

    #[test]
    fn test_insert_at_counter_limit_fails() {
        let mut playlist = Playlist::from_songs(vec![Song {
            id: u32::MAX - 2,
            title: "Near the end".to_string(),
        }]);

        assert_eq!(playlist.insert("Last").unwrap().id, u32::MAX - 1);
        assert!(matches!(
            playlist.insert("Too many"),
            Err(PlaylistError::IdsExhausted)
        ));
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.next_id(), u32::MAX);
    }

    #[test]
    fn test_from_songs_with_max_id_does_not_overflow() {
        let mut playlist = Playlist::from_songs(vec![Song {
            id: u32::MAX,
            title: "Max".to_string(),
        }]);

        assert_eq!(playlist.next_id(), u32::MAX);
        assert!(matches!(
            playlist.insert("Clash"),
            Err(PlaylistError::IdsExhausted)
        ));
        assert_eq!(playlist.len(), 1);
    }
}
