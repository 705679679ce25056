//! AI move selection
//!
//! The engine looks exactly one move ahead. Every legal move of the side to
//! move is applied to a private copy of the board and scored with
//! [`crate::eval::score_move`]. The highest-scoring moves are collected in
//! generation order and one of them is picked with the engine's own seeded
//! generator, so the same seed and position always give the same move.
//!
//! # Example
//!
//! ```
//! use ataxx::{AIEngine, Board};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new(7);
//!
//! let result = engine.get_move_with_stats(&board);
//! println!("AI plays {} (score {:?})", result.best_move, result.score);
//! board.apply(result.best_move).unwrap();
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, trace};

use crate::board::Board;
use crate::eval::{evaluate_move, Weights};
use crate::rules::{generate_moves, Move};

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move; `Move::Pass` when no clone or jump exists
    pub best_move: Move,
    /// Score of the chosen move, `None` for a pass
    pub score: Option<i32>,
    /// Number of legal moves scored
    pub candidates: usize,
    /// Number of moves sharing the best score
    pub tied: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// One-move-ahead Ataxx AI.
///
/// Holds its own random generator; there is no global random state.
pub struct AIEngine {
    rng: StdRng,
    weights: Weights,
    seed: u64,
}

impl AIEngine {
    /// Engine with default weights, seeded with `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(Weights::default(), seed)
    }

    /// Engine with custom weights.
    ///
    /// # Example
    ///
    /// ```
    /// use ataxx::{AIEngine, Weights};
    ///
    /// // Ignore mobility entirely
    /// let engine = AIEngine::with_config(Weights { mobility: 0, ..Weights::default() }, 1);
    /// assert_eq!(engine.weights().mobility, 0);
    /// ```
    #[must_use]
    pub fn with_config(weights: Weights, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            weights,
            seed,
        }
    }

    #[inline]
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the generator from the original seed
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    /// Move for the side to move on `board`
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Move {
        self.get_move_with_stats(board).best_move
    }

    /// Move for the side to move on `board`, with search statistics.
    ///
    /// `board` is only read; every candidate is played on a clone.
    #[instrument(skip(self, board), fields(side = %board.side_to_move()))]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let (best, best_score, candidates) = self.best_moves(board);

        let result = if best.is_empty() {
            MoveResult {
                best_move: Move::Pass,
                score: None,
                candidates,
                tied: 0,
                time_ms: elapsed_ms(start),
            }
        } else {
            let pick = self.rng.random_range(0..best.len());
            MoveResult {
                best_move: best[pick],
                score: Some(best_score),
                candidates,
                tied: best.len(),
                time_ms: elapsed_ms(start),
            }
        };

        debug!(
            mv = %result.best_move,
            score = ?result.score,
            candidates = result.candidates,
            tied = result.tied,
            time_ms = result.time_ms,
            "ai move chosen"
        );
        result
    }

    /// All moves sharing the highest score, in generation order, together
    /// with that score and the number of candidates scored.
    pub fn best_moves(&self, board: &Board) -> (Vec<Move>, i32, usize) {
        let side = board.side_to_move();
        let moves = generate_moves(board, side);
        let candidates = moves.len();

        let mut best_score = i32::MIN;
        let mut best = Vec::new();
        for mv in moves {
            let Some(score) = evaluate_move(board, mv, side, &self.weights) else {
                continue;
            };
            trace!(mv = %mv, score, "candidate");
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(mv);
            } else if score == best_score {
                best.push(mv);
            }
        }
        (best, best_score, candidates)
    }
}

/// Whole milliseconds since `start`, saturating at `u64::MAX`
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(0)
    }
}
