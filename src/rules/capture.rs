//! Capture rule for Ataxx
//!
//! After a clone or jump lands, every opponent piece on one of the 8 cells
//! touching the destination changes sides. Capture is a single layer: the
//! flipped pieces do not flip their own neighbors.

use crate::board::{Board, Piece, Side, Square, STRIDE};

/// Padded-store offsets of the 8 cells touching a square.
pub const NEIGHBOR_OFFSETS: [isize; 8] = [
    -(STRIDE as isize) - 1,
    -(STRIDE as isize),
    -(STRIDE as isize) + 1,
    -1,
    1,
    STRIDE as isize - 1,
    STRIDE as isize,
    STRIDE as isize + 1,
];

/// Squares holding `side`'s opponent that a piece landing on `to` would
/// capture.
///
/// Off-board neighbors are sentinel cells and never match.
pub fn get_captured_positions(board: &Board, to: Square, side: Side) -> Vec<Square> {
    let opponent = Piece::from(side.opposite());
    let center = to.to_index();

    NEIGHBOR_OFFSETS
        .iter()
        .map(|&off| center.wrapping_add_signed(off))
        .filter(|&idx| board.at(idx) == opponent)
        .filter_map(Square::from_index)
        .collect()
}

/// Number of pieces a piece of `side` landing on `to` would capture.
#[inline]
pub fn count_captures(board: &Board, to: Square, side: Side) -> usize {
    let opponent = Piece::from(side.opposite());
    let center = to.to_index();

    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&off| board.at(center.wrapping_add_signed(off)) == opponent)
        .count()
}
