use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use playlist_manager::cli::{print_playlist, Menu};
use playlist_manager::store::config::DEFAULT_FILE_NAME;
use playlist_manager::{PlaylistStore, StoreConfig};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-manager")]
#[command(about = "Manage a persistent song playlist", long_about = None)]
struct Args {
    /// Playlist file
    #[arg(short = 'f', long, default_value = DEFAULT_FILE_NAME)]
    file: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Rewrite the file through a temporary file and rename
    #[arg(long)]
    atomic: bool,

    /// Run a single command instead of the interactive menu
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a song at the end of the playlist
    Add { title: String },

    /// Remove a song by id
    Remove { id: u32 },

    /// Show the playlist
    List,

    /// Move a song one position up
    Up { id: u32 },

    /// Move a song one position down
    Down { id: u32 },

    /// Remove every song
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in path
    let path = shellexpand::tilde(&args.file);
    let config = StoreConfig::new(PathBuf::from(path.as_ref())).with_atomic_rewrite(args.atomic);

    let mut store = PlaylistStore::open(config)
        .with_context(|| format!("Failed to load playlist from {}", args.file))?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match args.command {
        None => Menu::new(&mut store, stdin.lock(), stdout.lock()).run()?,
        Some(Command::Add { title }) => {
            let song = store.add_song(&title).context("Cannot add song")?;
            println!("Added: {}", song);
        }
        Some(Command::Remove { id }) => {
            if !store.remove_song(id) {
                anyhow::bail!("Song #{} not found.", id);
            }
            println!("Removed: #{}", id);
        }
        Some(Command::List) => print_playlist(&mut stdout, store.list_songs())?,
        Some(Command::Up { id }) => {
            if !store.move_up(id) {
                anyhow::bail!("Cannot move up (maybe head or not found).");
            }
            println!("Moved up.");
        }
        Some(Command::Down { id }) => {
            if !store.move_down(id) {
                anyhow::bail!("Cannot move down (last or not found).");
            }
            println!("Moved down.");
        }
        Some(Command::Clear { yes }) => {
            if !yes {
                anyhow::bail!("Pass --yes to clear the playlist");
            }
            store.clear();
            println!("Playlist cleared.");
        }
    }

    Ok(())
}
