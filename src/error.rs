//! Error types for the Ataxx engine
//!
//! Every error is recoverable: the engine rejects the request and leaves
//! the board untouched, and the caller decides whether to re-prompt.

use thiserror::Error;

use crate::board::Square;

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("cells must be 1 or 2 apart")]
    BadShape,
    #[error("source cell does not hold a piece of the side to move")]
    NotOwned,
    #[error("destination cell is not empty")]
    Occupied,
    #[error("a move is available, passing is not allowed")]
    PassNotAllowed,
}

/// Why a blocker could not be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupRejection {
    #[error("cell is not empty")]
    NotEmpty,
    #[error("blockers can only be placed before the first move")]
    GameStarted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtaxxError {
    #[error("illegal move {notation}: {reason}")]
    IllegalMove {
        notation: String,
        reason: MoveRejection,
    },

    #[error("cannot place a blocker at {square}: {reason}")]
    IllegalSetup {
        square: Square,
        reason: SetupRejection,
    },

    #[error("malformed notation {0:?}")]
    MalformedNotation(String),
}

pub type Result<T> = std::result::Result<T, AtaxxError>;
