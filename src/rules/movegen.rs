//! Legal move generation
//!
//! Source cells are scanned row 7 down to row 1, columns `a` to `g`. For each
//! source the 24 targets within two cells are tried in `MOVE_OFFSETS` order,
//! so the output is fully determined by the board.

use crate::board::{Board, Piece, Side, Square, STRIDE};

use super::moves::Move;

/// (column delta, row delta) for every cell within Chebyshev distance 2,
/// column delta outer, row delta inner.
pub const MOVE_OFFSETS: [(i8, i8); 24] = {
    let mut offsets = [(0i8, 0i8); 24];
    let mut n = 0;
    let mut dc = -2i8;
    while dc <= 2 {
        let mut dr = -2i8;
        while dr <= 2 {
            if dc != 0 || dr != 0 {
                offsets[n] = (dc, dr);
                n += 1;
            }
            dr += 1;
        }
        dc += 1;
    }
    offsets
};

#[inline]
fn index_offset((dc, dr): (i8, i8)) -> isize {
    dr as isize * STRIDE as isize + dc as isize
}

/// Squares currently held by `side`, in scan order
fn sources(board: &Board, side: Side) -> impl Iterator<Item = Square> + '_ {
    let piece = Piece::from(side);
    Square::all().filter(move |&sq| board.content(sq) == piece)
}

/// Empty cells reachable from `from` by a clone or jump
fn targets(board: &Board, from: Square) -> impl Iterator<Item = Square> + '_ {
    let center = from.to_index();
    MOVE_OFFSETS
        .iter()
        .map(move |&off| center.wrapping_add_signed(index_offset(off)))
        .filter(move |&idx| board.at(idx) == Piece::Empty)
        .filter_map(Square::from_index)
}

/// All clone and jump moves legal for `side`.
///
/// Empty when `side` has to pass. `side` does not have to be the side to
/// move, which lets the evaluator measure both players' mobility.
pub fn generate_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in sources(board, side) {
        for to in targets(board, from) {
            if let Ok(mv) = Move::new(from, to) {
                if board.is_legal_for(side, mv) {
                    moves.push(mv);
                }
            }
        }
    }
    moves
}

/// Same as `generate_moves(board, side).len()` without allocating
pub fn count_moves(board: &Board, side: Side) -> usize {
    sources(board, side).map(|from| targets(board, from).count()).sum()
}

/// Whether `side` has any clone or jump available
pub fn has_moves(board: &Board, side: Side) -> bool {
    sources(board, side).any(|from| targets(board, from).next().is_some())
}
