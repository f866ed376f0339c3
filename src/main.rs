//! Five-in-a-row board inspector
//!
//! Replays a move list from an empty board and prints the position, its
//! terminal state and optionally the legal moves.
//!
//! ```text
//! gomoku --size 10 5,5 5,6 6,6 --legal
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use gomoku::{Board, BoardConfig, OpeningPolicy, Pos, Stone};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Player {
    Black,
    White,
}

impl From<Player> for Stone {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Stone::Black,
            Player::White => Stone::White,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Opening {
    Anywhere,
    Center,
    Deferred,
}

impl From<Opening> for OpeningPolicy {
    fn from(opening: Opening) -> Self {
        match opening {
            Opening::Anywhere => OpeningPolicy::Anywhere,
            Opening::Center => OpeningPolicy::Center,
            Opening::Deferred => OpeningPolicy::Deferred,
        }
    }
}

#[derive(Parser)]
#[command(name = "gomoku")]
#[command(about = "Replay five-in-a-row moves and inspect the resulting board")]
struct Args {
    /// TOML board configuration; command-line flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board side
    #[arg(short, long)]
    size: Option<usize>,

    /// Color that moves first
    #[arg(short, long, value_enum)]
    first: Option<Player>,

    /// Legal moves offered on an empty board
    #[arg(short, long, value_enum)]
    opening: Option<Opening>,

    /// Print the legal moves of the final position
    #[arg(short, long)]
    legal: bool,

    /// Moves as 1-indexed `row,col`, played alternately
    moves: Vec<String>,
}

/// Parse a 1-indexed `row,col` into a board position
fn parse_move(text: &str) -> Result<Pos> {
    let Some((row, col)) = text.split_once(',') else {
        bail!("move `{text}` is not in row,col form");
    };
    let row: u8 = row.trim().parse().with_context(|| format!("bad row in `{text}`"))?;
    let col: u8 = col.trim().parse().with_context(|| format!("bad column in `{text}`"))?;
    if row == 0 || col == 0 {
        bail!("move `{text}`: rows and columns start at 1");
    }
    Ok(Pos::new(row - 1, col - 1))
}

fn load_config(args: &Args) -> Result<BoardConfig> {
    let mut config = match &args.config {
        Some(path) => BoardConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => BoardConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(first) = args.first {
        config.first_player = first.into();
    }
    if let Some(opening) = args.opening {
        config.opening = opening.into();
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    debug!(?config, "board configuration");

    let mut board = Board::from_config(&config)?;
    for (ply, text) in args.moves.iter().enumerate() {
        if board.is_terminal() {
            bail!("move {} (`{text}`) played after the game ended", ply + 1);
        }
        let pos = parse_move(text)?;
        board = board
            .apply_move(pos)
            .with_context(|| format!("move {} (`{text}`)", ply + 1))?;
    }
    info!(stones = board.stone_count(), "replayed moves");

    println!("{board}");
    println!();
    match board.winner() {
        Some(color) => println!("Winner: {color:?}"),
        None if board.is_full() => println!("Draw: board is full"),
        None => println!("To move: {:?}", board.to_move()),
    }
    println!("Terminal: {}", board.is_terminal());

    if args.legal {
        let moves: Vec<String> = board
            .legal_moves()
            .iter()
            .map(|p| format!("{},{}", p.row + 1, p.col + 1))
            .collect();
        println!("Legal moves ({}): {}", moves.len(), moves.join(" "));
    }

    Ok(())
}
