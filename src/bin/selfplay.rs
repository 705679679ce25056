//! Ataxx self-play
//!
//! Plays the AI against itself from the opening position and prints the
//! final board and result.
//!
//! Usage: `ataxx-selfplay [SEED]` (default seed 0). Set `RUST_LOG=debug` to
//! see every applied move and capture.

use std::process::ExitCode;

use ataxx::{AiPlayer, Board, Player};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Safety stop for games that cycle through jumps
const MAX_PLIES: u32 = 1000;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(e) => {
                error!(arg = %arg, error = %e, "seed must be a non-negative integer");
                return ExitCode::FAILURE;
            }
        },
        None => 0,
    };

    println!("===========================================");
    println!("          Ataxx self-play (seed {seed})");
    println!("===========================================\n");

    let mut board = Board::new();
    // Both sides share one engine so a single seed fixes the whole game.
    let mut ai = AiPlayer::new(seed);

    while !board.is_game_over() && board.moves_played() < MAX_PLIES {
        let side = board.side_to_move();
        let Some(mv) = ai.choose_move(&board, side) else {
            break;
        };
        let score = ai.last_result().and_then(|r| r.score);
        match board.apply(mv) {
            Ok(captured) => {
                info!(ply = board.moves_played(), %side, %mv, ?score, captures = captured.len(), "move");
            }
            Err(e) => {
                error!(error = %e, "engine produced an illegal move");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("{board}\n");
    println!("{}", board.status());
    println!("Moves played: {}", board.moves_played());
    if !board.is_game_over() {
        println!("Stopped after {MAX_PLIES} plies without a result");
    }
    ExitCode::SUCCESS
}
