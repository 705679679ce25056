//! Board representation for Ataxx

pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use crate::error::AtaxxError;

// Re-exports
pub use board::Board;

/// Playable board size (7x7)
pub const BOARD_SIZE: usize = 7;
/// Depth of the sentinel border around the playable area
pub const BORDER: usize = 2;
/// Row stride of the padded store
pub const STRIDE: usize = BOARD_SIZE + 2 * BORDER; // 11
pub const PADDED_CELLS: usize = STRIDE * STRIDE; // 121

const _: () = assert!(STRIDE == 11 && PADDED_CELLS == 121);
// A jump from the last playable cell still lands inside the store.
const _: () = assert!((BORDER + BOARD_SIZE - 1) * (STRIDE + 1) + 2 * (STRIDE + 1) < PADDED_CELLS);

const COLUMNS: &[u8; BOARD_SIZE] = b"abcdefg";

/// The two playable sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Blue => "Blue",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    Blocked,
    Red,
    Blue,
}

impl Piece {
    /// Opposite playable piece; `None` for `Empty` and `Blocked`
    #[inline]
    pub fn opposite(self) -> Option<Piece> {
        self.side().map(|side| Piece::from(side.opposite()))
    }

    /// Side owning this piece, if any
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Piece::Red => Some(Side::Red),
            Piece::Blue => Some(Side::Blue),
            Piece::Empty | Piece::Blocked => None,
        }
    }

    /// Single-character glyph used by the text board
    pub fn glyph(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::Blocked => 'X',
            Piece::Red => 'r',
            Piece::Blue => 'b',
        }
    }
}

impl From<Side> for Piece {
    #[inline]
    fn from(side: Side) -> Piece {
        match side {
            Side::Red => Piece::Red,
            Side::Blue => Piece::Blue,
        }
    }
}

/// A playable cell, column `a..g` (0-6) and row `1..7` (0-6).
///
/// Outside the crate a square can only come from [`Square::try_new`],
/// parsing or [`Square::all`], so it always lies on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    col: u8,
    row: u8,
}

impl Square {
    /// Caller guarantees both coordinates are below `BOARD_SIZE`
    #[inline]
    pub(crate) fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < BOARD_SIZE as u8 && row < BOARD_SIZE as u8);
        Self { col, row }
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    /// Checked constructor for signed coordinates
    #[inline]
    pub fn try_new(col: i32, row: i32) -> Option<Self> {
        if Self::is_valid(col, row) {
            Some(Self::new(col as u8, row as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(col: i32, row: i32) -> bool {
        col >= 0 && col < BOARD_SIZE as i32 && row >= 0 && row < BOARD_SIZE as i32
    }

    /// Index into the padded store
    #[inline]
    pub fn to_index(self) -> usize {
        (self.row as usize + BORDER) * STRIDE + self.col as usize + BORDER
    }

    /// Inverse of `to_index`; `None` for sentinel cells
    #[inline]
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx >= PADDED_CELLS {
            return None;
        }
        let row = (idx / STRIDE) as i32 - BORDER as i32;
        let col = (idx % STRIDE) as i32 - BORDER as i32;
        Self::try_new(col, row)
    }

    /// Chebyshev distance between two squares
    #[inline]
    pub fn distance(self, other: Square) -> u8 {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        dc.max(dr)
    }

    /// All 49 playable squares, row 7 first, columns `a` to `g`
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .rev()
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square::new(col, row)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLUMNS[self.col as usize] as char, self.row + 1)
    }
}

impl FromStr for Square {
    type Err = AtaxxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AtaxxError::MalformedNotation(s.to_string());
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(malformed());
        }
        let col = COLUMNS.iter().position(|&c| c == bytes[0]).ok_or_else(malformed)?;
        let row = match bytes[1] {
            b'1'..=b'7' => bytes[1] - b'1',
            _ => return Err(malformed()),
        };
        Ok(Square::new(col as u8, row))
    }
}
