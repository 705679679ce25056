//! Ataxx rules engine with a one-move-ahead AI
//!
//! Ataxx is played on a 7x7 grid by Red and Blue. A piece either clones
//! into an adjacent empty cell or jumps two cells away, leaving its source
//! empty. Opponent pieces touching the destination change sides. A side
//! with no clone or jump passes. The game ends when neither side can move
//! or one side has no pieces left; the side holding more pieces wins.
//!
//! # Architecture
//!
//! - [`board`]: Padded board representation, cells and sides
//! - [`rules`]: Moves, legality, move generation, captures, game end
//! - [`eval`]: Move scoring for the AI
//! - [`engine`]: Seeded AI that picks among the best-scoring moves
//! - [`player`]: Common interface for human and AI players
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use ataxx::{AIEngine, Board, Move};
//!
//! let mut board = Board::new();
//! board.apply("a7-b6".parse::<Move>().unwrap()).unwrap();
//!
//! // AI replies as Blue
//! let mut engine = AIEngine::new(42);
//! let reply = engine.get_move(&board);
//! board.apply(reply).unwrap();
//! println!("{}", board.status());
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod player;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, Side, Square, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use error::{AtaxxError, MoveRejection, SetupRejection};
pub use eval::Weights;
pub use player::{AiPlayer, ManualPlayer, Player};
pub use rules::{Move, Outcome};
