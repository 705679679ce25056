//! End-of-game detection for Ataxx
//!
//! A side with no clone or jump passes while its opponent can still play.
//! The game is over once neither side can clone or jump, or once the side
//! to move has no pieces left. The side holding more cells at that point
//! wins; equal counts are a draw.

use std::fmt;

use crate::board::{Board, Side};

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

impl Outcome {
    /// Winning side, `None` for a draw
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(side),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{side} wins"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// Result of the position, or `None` while the game goes on
pub fn check_winner(board: &Board) -> Option<Outcome> {
    let mover = board.side_to_move();
    if board.has_legal_move(mover) {
        return None;
    }
    // Stuck with pieces on the board: pass and wait for the opponent.
    if board.count(mover) > 0 && board.has_legal_move(mover.opposite()) {
        return None;
    }
    let red = board.count(Side::Red);
    let blue = board.count(Side::Blue);
    Some(match red.cmp(&blue) {
        std::cmp::Ordering::Greater => Outcome::Winner(Side::Red),
        std::cmp::Ordering::Less => Outcome::Winner(Side::Blue),
        std::cmp::Ordering::Equal => Outcome::Draw,
    })
}
