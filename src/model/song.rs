use crate::error::{PlaylistError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest title we keep, in bytes
pub const MAX_TITLE_LEN: usize = 199;

/// A single playlist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique identifier, never reused while the store is alive
    pub id: u32,

    /// Song title (normalized, never empty)
    pub title: String,
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} - {}", self.id, self.title)
    }
}

/// Normalize a raw title from user input or a file record.
///
/// Cuts at the first line ending, turns tabs into spaces, trims, and
/// bounds the length to [`MAX_TITLE_LEN`] bytes.
pub fn normalize_title(raw: &str) -> Result<String> {
    let line = match raw.find(['\r', '\n']) {
        Some(end) => &raw[..end],
        None => raw,
    };

    let title = line.replace('\t', " ");
    let mut title = title.trim().to_string();

    if title.len() > MAX_TITLE_LEN {
        let mut end = MAX_TITLE_LEN;
        while !title.is_char_boundary(end) {
            end -= 1;
        }
        title.truncate(end);
        // Truncation may expose trailing whitespace
        title.truncate(title.trim_end().len());
    }

    if title.is_empty() {
        return Err(PlaylistError::EmptyTitle);
    }

    Ok(title)
}
