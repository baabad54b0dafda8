//! Text front end for the playlist store

mod menu;

pub use menu::{print_playlist, Menu};
