use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{Level, info};

use jingle::catalog::{self, Catalog};
use jingle::favorites::Favorites;
use jingle::player::Player;
use jingle::sink::{CpalSink, LogSink, ToneSink};
use jingle::song::Song;
use jingle::{Error, Result};

#[derive(Parser)]
#[command(name = "jingle", about = "Doorbell jingle player")]
#[command(version)]
struct Cli {
    /// Log every note
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in songs
    List,

    /// Compile a song and display its note table
    Show {
        /// Song id (see `list`)
        song: String,

        /// Override tempo (BPM)
        #[arg(long)]
        tempo: Option<u32>,

        /// Override octave shift
        #[arg(long, allow_hyphen_values = true)]
        shift: Option<i32>,
    },

    /// Play a song on the speaker
    Play {
        /// Song id (see `list`)
        song: String,

        /// Override tempo (BPM)
        #[arg(long)]
        tempo: Option<u32>,

        /// Override octave shift
        #[arg(long, allow_hyphen_values = true)]
        shift: Option<i32>,

        /// Log tones instead of sounding them
        #[arg(long)]
        dry_run: bool,
    },

    /// Play a user's favorite song
    Ring {
        /// User identifier
        user: String,

        /// Path to a favorites file (`user: song` per line)
        #[arg(long)]
        favorites: Option<PathBuf>,

        /// Log tones instead of sounding them
        #[arg(long)]
        dry_run: bool,
    },

    /// List users and their favorite songs
    Users {
        /// Path to a favorites file (`user: song` per line)
        #[arg(long)]
        favorites: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let catalog = Catalog::builtin()?;

    match command {
        Command::List => {
            for song in catalog.iter() {
                println!(
                    "{:<18} {:<22} {:>3} BPM  {:>3} notes  {:>6} ms",
                    song.id,
                    song.name,
                    song.tempo,
                    song.len(),
                    song.total_duration_ms()
                );
            }
        }
        Command::Show { song, tempo, shift } => {
            let song = select(&catalog, &song, tempo, shift)?;
            print_song(&song, &song_symbols(song.id));
        }
        Command::Play {
            song,
            tempo,
            shift,
            dry_run,
        } => {
            let song = select(&catalog, &song, tempo, shift)?;
            let mut player = Player::new(open_sink(dry_run)?);
            song.play(&mut player);
        }
        Command::Ring {
            user,
            favorites,
            dry_run,
        } => {
            let favorites = load_favorites(favorites.as_deref(), &catalog)?;
            let song = favorites
                .find(&user)
                .ok_or_else(|| Error::UnknownUser(user.clone()))?;
            info!(user = %user, song = song.id, "ringing");
            let mut player = Player::new(open_sink(dry_run)?);
            song.play(&mut player);
        }
        Command::Users { favorites } => {
            let favorites = load_favorites(favorites.as_deref(), &catalog)?;
            println!("Users: {}", favorites.count());
            for favorite in favorites.iter() {
                println!("  {:<24} {}", favorite.user, favorite.song.name);
            }
        }
    }

    Ok(())
}

/// Pick a song from the catalog, recompiling it if tempo or shift is overridden.
fn select(catalog: &Catalog, id: &str, tempo: Option<u32>, shift: Option<i32>) -> Result<Song> {
    let song = catalog.require(id)?;
    if tempo.is_none() && shift.is_none() {
        return Ok(song.clone());
    }
    let sheet = catalog::sheet(id).ok_or_else(|| Error::UnknownSong(id.to_string()))?;
    Song::compile_with(
        sheet,
        tempo.unwrap_or(sheet.tempo),
        shift.unwrap_or(sheet.shift),
    )
}

fn song_symbols(id: &str) -> Vec<String> {
    catalog::sheet(id)
        .map(|sheet| {
            sheet
                .notes
                .iter()
                .map(|n| match n.pitch {
                    Some(p) => format!("{}{}", p.symbol(), n.octave),
                    None => "rest".to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn open_sink(dry_run: bool) -> Result<Box<dyn ToneSink>> {
    if dry_run {
        return Ok(Box::new(LogSink::new()));
    }
    Ok(Box::new(CpalSink::open()?))
}

fn load_favorites<'a>(path: Option<&Path>, catalog: &'a Catalog) -> Result<Favorites<'a>> {
    match path {
        Some(path) => Favorites::load(path, catalog),
        None => Favorites::builtin(catalog),
    }
}

fn print_song(song: &Song, symbols: &[String]) {
    println!("Song: {} ({})", song.name, song.id);
    println!("Tempo: {} BPM", song.tempo);
    println!("Octave shift: {}", song.shift);
    println!("Notes: {}", song.len());
    println!("Duration: {} ms", song.total_duration_ms());
    println!();
    for (i, note) in song.notes().iter().enumerate() {
        let symbol = symbols.get(i).map(String::as_str).unwrap_or("?");
        if note.is_rest() {
            println!("  {:>3}  {:<5}          {:>5} ms", i, symbol, note.duration_ms);
        } else {
            println!(
                "  {:>3}  {:<5} {:>5} Hz  {:>5} ms",
                i, symbol, note.frequency_hz, note.duration_ms
            );
        }
    }
}
