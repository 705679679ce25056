//! One-move-ahead evaluation for Ataxx
//!
//! A candidate move is scored on a private copy of the board after the move
//! is applied. The score is a weighted sum of four terms:
//! - Captures: opponent pieces flipped by the move
//! - Distance: 1 for a jump, 0 for a clone (subtracted)
//! - Control: own pieces minus opponent pieces
//! - Mobility: own legal moves minus opponent legal moves

use crate::board::{Board, Side};
use crate::rules::{count_captures, count_moves, Move};

/// Weights of the evaluation terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub capture: i32,
    /// Subtracted once for a jump
    pub distance_penalty: i32,
    pub control: i32,
    pub mobility: i32,
}

impl Weights {
    pub const DEFAULT: Weights = Weights {
        capture: 10,
        distance_penalty: 2,
        control: 5,
        mobility: 3,
    };
}

impl Default for Weights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Raw terms of a scored move, before weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveScore {
    pub captures: i32,
    pub distance: i32,
    pub control: i32,
    pub mobility: i32,
}

impl MoveScore {
    #[must_use]
    pub fn total(&self, weights: &Weights) -> i32 {
        weights.capture * self.captures - weights.distance_penalty * self.distance
            + weights.control * self.control
            + weights.mobility * self.mobility
    }
}

/// Score `mv` for `side` on a copy of `board`.
///
/// Returns `None` if the move is not legal on `board`. The caller's board is
/// never modified.
#[must_use]
pub fn score_move(board: &Board, mv: Move, side: Side) -> Option<MoveScore> {
    let captures = match mv.destination() {
        Some(to) => count_captures(board, to, side) as i32,
        None => 0,
    };

    let mut after = board.clone();
    after.apply(mv).ok()?;

    Some(MoveScore {
        captures,
        distance: i32::from(mv.is_jump()),
        control: control_score(&after, side),
        mobility: mobility_score(&after, side),
    })
}

/// Weighted score of `mv` for `side`
#[must_use]
pub fn evaluate_move(board: &Board, mv: Move, side: Side, weights: &Weights) -> Option<i32> {
    score_move(board, mv, side).map(|s| s.total(weights))
}

/// Own cells minus opponent cells
#[inline]
pub fn control_score(board: &Board, side: Side) -> i32 {
    board.count(side) as i32 - board.count(side.opposite()) as i32
}

/// Own legal moves minus opponent legal moves
#[inline]
pub fn mobility_score(board: &Board, side: Side) -> i32 {
    count_moves(board, side) as i32 - count_moves(board, side.opposite()) as i32
}
