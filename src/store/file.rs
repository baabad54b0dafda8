//! Line-oriented playlist file
//!
//! One record per line: `<id>\t<title>\n`. No header, no trailer.

use crate::error::{PlaylistError, Result};
use crate::model::{normalize_title, Playlist, Song};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Record separator between id and title
const SEPARATOR: char = '\t';

/// Reads and writes the playlist file
#[derive(Debug, Clone)]
pub struct PlaylistFile {
    path: PathBuf,
    atomic_rewrite: bool,
}

impl PlaylistFile {
    pub fn new(path: PathBuf, atomic_rewrite: bool) -> Self {
        Self {
            path,
            atomic_rewrite,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every valid record in file order.
    ///
    /// A missing file yields an empty playlist.
    pub fn load_all(&self) -> Result<Playlist> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No playlist file at {:?}, starting empty", self.path);
                return Ok(Playlist::new());
            }
            Err(e) => return Err(PlaylistError::persistence(&self.path, e)),
        };

        let reader = BufReader::new(file);
        let mut songs = Vec::new();
        let mut seen = HashSet::new();

        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|e| PlaylistError::persistence(&self.path, e))?;
            let line = String::from_utf8_lossy(&line);
            let line_no = index + 1;

            let Some(song) = parse_record(&line, line_no) else {
                continue;
            };

            if !seen.insert(song.id) {
                log::warn!(
                    "Skipping duplicate id {} on line {} of {:?}",
                    song.id,
                    line_no,
                    self.path
                );
                continue;
            }

            songs.push(song);
        }

        log::info!("Loaded {} songs from {:?}", songs.len(), self.path);
        Ok(Playlist::from_songs(songs))
    }

    /// Append a single record. Only valid right after an insertion.
    pub fn append_one(&self, song: &Song) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PlaylistError::persistence(&self.path, e))?;

        let mut writer = BufWriter::new(file);
        write_record(&mut writer, song)
            .and_then(|_| writer.flush())
            .map_err(|e| PlaylistError::persistence(&self.path, e))?;

        log::debug!("Appended song #{} to {:?}", song.id, self.path);
        Ok(())
    }

    /// Replace the file contents with the full playlist in order
    pub fn rewrite_all(&self, playlist: &Playlist) -> Result<()> {
        if self.atomic_rewrite {
            self.rewrite_via_rename(playlist)?;
        } else {
            write_all_to(&self.path, playlist)?;
        }

        log::debug!("Rewrote {:?} with {} songs", self.path, playlist.len());
        Ok(())
    }

    fn rewrite_via_rename(&self, playlist: &Playlist) -> Result<()> {
        let tmp_path = self.tmp_path();
        write_all_to(&tmp_path, playlist)?;

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PlaylistError::persistence(&self.path, e));
        }

        Ok(())
    }

    /// Sibling temp file: `<name>.tmp`
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("playlist"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Truncate `path` and write every record of `playlist`
fn write_all_to(path: &Path, playlist: &Playlist) -> Result<()> {
    let file = File::create(path).map_err(|e| PlaylistError::persistence(path, e))?;

    let mut writer = BufWriter::new(file);
    for song in playlist.songs() {
        write_record(&mut writer, song).map_err(|e| PlaylistError::persistence(path, e))?;
    }

    writer
        .into_inner()
        .map_err(|e| PlaylistError::persistence(path, e.into_error()))?
        .sync_all()
        .map_err(|e| PlaylistError::persistence(path, e))
}

fn write_record<W: Write>(writer: &mut W, song: &Song) -> std::io::Result<()> {
    writeln!(writer, "{}{}{}", song.id, SEPARATOR, song.title)
}

/// Parse one line into a song, or `None` if it should be skipped
fn parse_record(line: &str, line_no: usize) -> Option<Song> {
    let Some((id_field, title_field)) = line.split_once(SEPARATOR) else {
        log::debug!("Skipping line {} without separator", line_no);
        return None;
    };

    let id = match id_field.trim().parse::<u32>() {
        Ok(u32::MAX) => {
            log::warn!(
                "Skipping line {}: id {} leaves no room for new songs",
                line_no,
                u32::MAX
            );
            return None;
        }
        Ok(id) if id > 0 => id,
        _ => {
            log::warn!("Skipping line {}: invalid id {:?}", line_no, id_field);
            return None;
        }
    };

    match normalize_title(title_field) {
        Ok(title) => Some(Song { id, title }),
        Err(_) => {
            log::warn!("Skipping line {}: empty title", line_no);
            None
        }
    }
}
