//! Interactive numbered menu

use crate::error::PlaylistError;
use crate::model::Song;
use crate::store::PlaylistStore;
use anyhow::Result;
use std::io::{BufRead, Write};

const MENU: &str = "\n1) Add song\n2) Remove song by id\n3) Show playlist\n4) Move up\n5) Move down\n6) Clear playlist\n0) Exit\nChoose: ";

/// Menu loop reading commands from `input` and writing to `output`
pub struct Menu<'a, R: BufRead, W: Write> {
    store: &'a mut PlaylistStore,
    input: R,
    output: W,
}

/// Print the playlist the way the menu shows it
pub fn print_playlist<W: Write>(output: &mut W, songs: &[Song]) -> Result<()> {
    if songs.is_empty() {
        writeln!(output, "Playlist empty.")?;
        return Ok(());
    }

    writeln!(output, "\n--- Playlist ---")?;
    for (index, song) in songs.iter().enumerate() {
        writeln!(output, "{:3}) {}", index + 1, song)?;
    }
    Ok(())
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut PlaylistStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until the user picks 0 or input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Playlist Manager (persistent)")?;

        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let choice = match line.trim().parse::<u32>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.output, "Invalid input.")?;
                    continue;
                }
            };

            match choice {
                0 => break,
                1 => self.add()?,
                2 => self.remove()?,
                3 => print_playlist(&mut self.output, self.store.list_songs())?,
                4 => self.move_up()?,
                5 => self.move_down()?,
                6 => self.clear()?,
                _ => writeln!(self.output, "Invalid.")?,
            }
        }

        writeln!(self.output, "Exiting.")?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Enter song title: ")? else {
            return Ok(());
        };

        match self.store.add_song(&title) {
            Ok(song) => writeln!(self.output, "Added: {}", song)?,
            Err(PlaylistError::EmptyTitle) => writeln!(self.output, "Empty title.")?,
            Err(PlaylistError::IdsExhausted) => writeln!(self.output, "No song ids left.")?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Enter song id: ")? else {
            return Ok(());
        };

        let song = self.store.get(id).cloned();
        match song {
            Some(song) if self.store.remove_song(id) => {
                writeln!(self.output, "Removed: {}", song)?
            }
            _ => writeln!(self.output, "Song #{} not found.", id)?,
        }
        Ok(())
    }

    fn move_up(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Enter song id to move up: ")? else {
            return Ok(());
        };

        if self.store.move_up(id) {
            writeln!(self.output, "Moved up.")?;
        } else {
            writeln!(self.output, "Cannot move up (maybe head or not found).")?;
        }
        Ok(())
    }

    fn move_down(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Enter song id to move down: ")? else {
            return Ok(());
        };

        if self.store.move_down(id) {
            writeln!(self.output, "Moved down.")?;
        } else {
            writeln!(self.output, "Cannot move down (last or not found).")?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let answer = self
            .prompt("Confirm clear playlist? (y/N): ")?
            .unwrap_or_default();

        if answer.trim().starts_with(['y', 'Y']) {
            self.store.clear();
            writeln!(self.output, "Playlist cleared.")?;
        } else {
            writeln!(self.output, "Cancelled.")?;
        }
        Ok(())
    }

    /// Print a prompt and read the answer; `None` on end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_id(&mut self, text: &str) -> Result<Option<u32>> {
        let Some(answer) = self.prompt(text)? else {
            return Ok(None);
        };

        match answer.trim().parse::<u32>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid.")?;
                Ok(None)
            }
        }
    }

    /// Read one line, decoding invalid UTF-8 lossily
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}
