//! GUI module for the Ataxx game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::AtaxxApp;
pub use game_state::{GameMode, GameState, MoveTimer};
