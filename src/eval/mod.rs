//! Move evaluation for the Ataxx AI

pub mod heuristic;

pub use heuristic::{control_score, evaluate_move, mobility_score, score_move, MoveScore, Weights};
