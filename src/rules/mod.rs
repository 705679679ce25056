//! Game rules for Ataxx
//!
//! This module implements the rule set on top of the board:
//! - Move values and notation (clone, jump, pass)
//! - Legal move generation
//! - Capture of adjacent opponent pieces
//! - End-of-game detection

pub mod capture;
pub mod movegen;
pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use capture::{count_captures, get_captured_positions, NEIGHBOR_OFFSETS};
pub use movegen::{count_moves, generate_moves, has_moves, MOVE_OFFSETS};
pub use moves::{is_clone, is_jump, Move};
pub use win::{check_winner, Outcome};
