//! Players: anything that can produce a move for a position
//!
//! Human and AI turns go through the same [`Player`] trait, so a turn
//! driver never needs to know who is on move.

use std::collections::VecDeque;

use tracing::warn;

use crate::board::{Board, Side};
use crate::engine::{AIEngine, MoveResult};
use crate::error::Result;
use crate::rules::Move;

pub trait Player {
    /// Move for `side` on `board`, or `None` if the player has nothing to
    /// offer yet (a human who has not entered a move).
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<Move>;

    /// Whether moves come without outside input
    fn is_automatic(&self) -> bool;
}

/// Player fed with moves typed or clicked by a human
#[derive(Debug, Default)]
pub struct ManualPlayer {
    pending: VecDeque<Move>,
}

impl ManualPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a move given in notation (`c2-d3` or `pass`).
    ///
    /// # Errors
    /// `MalformedNotation` or `IllegalMove` (bad shape) if the text does not
    /// describe a move. Legality on the board is checked when it is played.
    pub fn submit(&mut self, notation: &str) -> Result<Move> {
        let mv = notation.parse::<Move>().inspect_err(|e| warn!(input = notation, error = %e, "rejected input"))?;
        self.pending.push_back(mv);
        Ok(mv)
    }

    pub fn submit_move(&mut self, mv: Move) {
        self.pending.push_back(mv);
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl Player for ManualPlayer {
    fn choose_move(&mut self, _board: &Board, _side: Side) -> Option<Move> {
        self.pending.pop_front()
    }

    fn is_automatic(&self) -> bool {
        false
    }
}

/// Player backed by the AI engine
pub struct AiPlayer {
    engine: AIEngine,
    last_result: Option<MoveResult>,
}

impl AiPlayer {
    pub fn new(seed: u64) -> Self {
        Self::with_engine(AIEngine::new(seed))
    }

    pub fn with_engine(engine: AIEngine) -> Self {
        Self { engine, last_result: None }
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    /// Statistics of the most recent decision
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }

    /// Restart the engine's generator and forget the last decision
    pub fn reset(&mut self) {
        self.engine.reset();
        self.last_result = None;
    }
}

impl Player for AiPlayer {
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        if board.side_to_move() != side {
            return None;
        }
        let result = self.engine.get_move_with_stats(board);
        let mv = result.best_move;
        self.last_result = Some(result);
        Some(mv)
    }

    fn is_automatic(&self) -> bool {
        true
    }
}
