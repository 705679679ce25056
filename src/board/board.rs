//! Board structure with sentinel border and incremental piece counts

use std::fmt;

use tracing::debug;

use super::{Piece, Side, Square, BOARD_SIZE, BORDER, PADDED_CELLS, STRIDE};
use crate::error::{AtaxxError, MoveRejection, Result, SetupRejection};
use crate::rules::{self, Move, Outcome};

// Jump offsets reach two cells out, so every offset from a playable cell
// must stay inside the padded store.
const _: () = assert!(BORDER >= 2);
const _: () = assert!(PADDED_CELLS == STRIDE * STRIDE);

/// Game board.
///
/// The 7x7 playable area is stored inside an 11x11 array whose outer two
/// rings are permanently `Blocked`. Neighbor and jump targets are reached
/// by adding a fixed offset to a cell's index; targets off the playable
/// area land on a sentinel and can never be moved to or captured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Piece; PADDED_CELLS],
    to_move: Side,
    red_count: u32,
    blue_count: u32,
    /// Number of applied moves, passes included. Zero means setup phase.
    moves_played: u32,
}

impl Board {
    /// Starting position: Red on a7 and g1, Blue on a1 and g7, Red to move.
    pub fn new() -> Self {
        let mut board = Self::blank();
        board.set(Square::new(0, 6), Piece::Red);
        board.set(Square::new(6, 0), Piece::Red);
        board.set(Square::new(0, 0), Piece::Blue);
        board.set(Square::new(6, 6), Piece::Blue);
        board
    }

    /// All playable cells empty, sentinels blocked.
    fn blank() -> Self {
        let mut cells = [Piece::Blocked; PADDED_CELLS];
        for sq in Square::all() {
            cells[sq.to_index()] = Piece::Empty;
        }
        let board = Self {
            cells,
            to_move: Side::Red,
            red_count: 0,
            blue_count: 0,
            moves_played: 0,
        };
        debug_assert!(board.border_intact());
        board
    }

    /// Content of a playable cell
    #[inline]
    pub fn content(&self, sq: Square) -> Piece {
        self.cells[sq.to_index()]
    }

    /// Content of a padded-store cell, sentinels included
    #[inline]
    pub(crate) fn at(&self, idx: usize) -> Piece {
        self.cells[idx]
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.to_move
    }

    /// Number of cells held by `side`
    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        match side {
            Side::Red => self.red_count,
            Side::Blue => self.blue_count,
        }
    }

    #[inline]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// True until the first move is applied; blockers may be placed only then
    #[inline]
    pub fn in_setup(&self) -> bool {
        self.moves_played == 0
    }

    /// Write a cell and keep the piece counts in step
    fn set(&mut self, sq: Square, piece: Piece) {
        let idx = sq.to_index();
        match self.cells[idx] {
            Piece::Red => self.red_count -= 1,
            Piece::Blue => self.blue_count -= 1,
            Piece::Empty | Piece::Blocked => {}
        }
        match piece {
            Piece::Red => self.red_count += 1,
            Piece::Blue => self.blue_count += 1,
            Piece::Empty | Piece::Blocked => {}
        }
        self.cells[idx] = piece;
    }

    /// Block an empty cell before play starts.
    ///
    /// # Errors
    /// `IllegalSetup` if the cell is not empty or a move was already applied.
    pub fn set_blocker(&mut self, sq: Square) -> Result<()> {
        if !self.in_setup() {
            return Err(AtaxxError::IllegalSetup {
                square: sq,
                reason: SetupRejection::GameStarted,
            });
        }
        if self.content(sq) != Piece::Empty {
            return Err(AtaxxError::IllegalSetup {
                square: sq,
                reason: SetupRejection::NotEmpty,
            });
        }
        self.set(sq, Piece::Blocked);
        debug!(square = %sq, "blocker placed");
        Ok(())
    }

    /// Whether `mv` is legal for the side to move
    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.is_legal_for(self.to_move, mv)
    }

    /// Whether `mv` would be legal if `side` were to move
    #[inline]
    pub fn is_legal_for(&self, side: Side, mv: Move) -> bool {
        self.check(side, mv).is_ok()
    }

    fn check(&self, side: Side, mv: Move) -> std::result::Result<(), MoveRejection> {
        let (from, to, distance) = match mv {
            Move::Clone { from, to } => (from, to, 1),
            Move::Jump { from, to } => (from, to, 2),
            Move::Pass => {
                return if self.has_legal_move(side) {
                    Err(MoveRejection::PassNotAllowed)
                } else {
                    Ok(())
                };
            }
        };
        if from.distance(to) != distance {
            return Err(MoveRejection::BadShape);
        }
        if self.content(from) != Piece::from(side) {
            return Err(MoveRejection::NotOwned);
        }
        if self.content(to) != Piece::Empty {
            return Err(MoveRejection::Occupied);
        }
        Ok(())
    }

    /// Whether `side` has at least one clone or jump available
    #[inline]
    pub fn has_legal_move(&self, side: Side) -> bool {
        rules::has_moves(self, side)
    }

    /// Apply a move for the side to move and return the captured squares.
    ///
    /// The side to move changes after every successful call, passes
    /// included.
    ///
    /// # Errors
    /// `IllegalMove` when the move is not legal; the board is left as is.
    pub fn apply(&mut self, mv: Move) -> Result<Vec<Square>> {
        let side = self.to_move;
        self.check(side, mv).map_err(|reason| AtaxxError::IllegalMove {
            notation: mv.to_string(),
            reason,
        })?;

        let piece = Piece::from(side);
        let captured = match mv {
            Move::Clone { to, .. } => self.land(to, side),
            Move::Jump { from, to } => {
                self.set(from, Piece::Empty);
                self.land(to, side)
            }
            Move::Pass => Vec::new(),
        };
        debug_assert!(captured.iter().all(|&sq| self.content(sq) == piece));

        self.to_move = side.opposite();
        self.moves_played += 1;
        debug_assert!(self.border_intact());
        debug_assert!(self.counts_consistent());

        debug!(
            side = %side,
            mv = %mv,
            captured = captured.len(),
            red = self.red_count,
            blue = self.blue_count,
            "move applied"
        );
        Ok(captured)
    }

    /// Place `side` on `to` and flip the adjacent opponent pieces
    fn land(&mut self, to: Square, side: Side) -> Vec<Square> {
        let captured = rules::get_captured_positions(self, to, side);
        let piece = Piece::from(side);
        self.set(to, piece);
        for &sq in &captured {
            self.set(sq, piece);
        }
        captured
    }

    /// Result of the game, or `None` while it goes on
    #[inline]
    pub fn winner(&self) -> Option<Outcome> {
        rules::check_winner(self)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Piece counts, e.g. `Red 3 - Blue 2`
    pub fn score(&self) -> String {
        format!("Red {} - Blue {}", self.red_count, self.blue_count)
    }

    /// Score plus either whose turn it is or the final result
    pub fn status(&self) -> String {
        match self.winner() {
            None => format!("{}, {} to move", self.score(), self.to_move),
            Some(outcome) => format!("{}, {}", self.score(), outcome),
        }
    }

    /// Every non-playable cell is still a blocked sentinel
    fn border_intact(&self) -> bool {
        (0..PADDED_CELLS)
            .filter(|&idx| Square::from_index(idx).is_none())
            .all(|idx| self.cells[idx] == Piece::Blocked)
    }

    fn counts_consistent(&self) -> bool {
        let count = |piece| Square::all().filter(|&sq| self.content(sq) == piece).count() as u32;
        count(Piece::Red) == self.red_count && count(Piece::Blue) == self.blue_count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE as u8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE as u8 {
                write!(f, " {}", self.content(Square::new(col, row)).glyph())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g")
    }
}

// Direct placement for building test positions.
#[cfg(test)]
impl Board {
    /// No pieces at all, Red to move
    pub(crate) fn empty() -> Self {
        Self::blank()
    }

    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.set(sq, piece);
    }

    pub(crate) fn set_side_to_move(&mut self, side: Side) {
        self.to_move = side;
    }

    pub(crate) fn sentinels_intact(&self) -> bool {
        self.border_intact()
    }
}
