//! Board printer.
//!
//! Prints a chess board (the standard position unless a FEN is given), the
//! side to move and the game status, and optionally that side's legal moves.

mod config;

use anyhow::Context;
use chess_engine::Board;
use clap::Parser;
use config::ChessConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-board")]
#[command(about = "Print a chess board and its legal moves")]
struct Cli {
    /// Position to print, in FEN
    #[arg(long)]
    fen: Option<String>,
    /// List the legal moves of the side to move
    #[arg(short, long)]
    moves: bool,
    /// Configuration file
    #[arg(short, long, default_value = ChessConfig::DEFAULT_PATH)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ChessConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let board = match cli.fen.or(config.start_fen) {
        Some(fen) => Board::from_fen(&fen).with_context(|| format!("invalid position: {}", fen))?,
        None => Board::standard(),
    };
    tracing::info!(fen = %board.to_fen(), "board loaded");

    print!("{}", board);
    println!("{} to move, {}", board.next_mover(), board.game_status());

    if cli.moves || config.show_legal_moves {
        let moves = board.current_player().legal_moves();
        println!("{} legal moves:", moves.len());
        for mv in moves {
            println!("  {}", mv);
        }
    }
    Ok(())
}
