//! Move values and their text notation
//!
//! A move is written as two cells joined by a hyphen (`c2-d3`), or as the
//! token `pass` in any letter case.

use std::fmt;
use std::str::FromStr;

use crate::board::Square;
use crate::error::{AtaxxError, MoveRejection};

/// A single Ataxx move.
///
/// The distance between `from` and `to` is fixed by the variant, so a
/// `Move` with any other shape cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Distance 1: a new piece appears at `to`, `from` is kept
    Clone { from: Square, to: Square },
    /// Distance 2: the piece at `from` relocates to `to`
    Jump { from: Square, to: Square },
    Pass,
}

/// True iff `from` and `to` are exactly one cell apart (any direction)
#[inline]
pub fn is_clone(from: Square, to: Square) -> bool {
    from.distance(to) == 1
}

/// True iff `from` and `to` are exactly two cells apart on the larger axis
#[inline]
pub fn is_jump(from: Square, to: Square) -> bool {
    from.distance(to) == 2
}

impl Move {
    /// Classify the transition `from -> to`.
    ///
    /// # Errors
    /// `IllegalMove` with `BadShape` when the cells are identical or more
    /// than two apart.
    pub fn new(from: Square, to: Square) -> Result<Self, AtaxxError> {
        match from.distance(to) {
            1 => Ok(Move::Clone { from, to }),
            2 => Ok(Move::Jump { from, to }),
            _ => Err(AtaxxError::IllegalMove {
                notation: format!("{from}-{to}"),
                reason: MoveRejection::BadShape,
            }),
        }
    }

    #[inline]
    pub fn pass() -> Self {
        Move::Pass
    }

    #[inline]
    pub fn is_clone(&self) -> bool {
        matches!(self, Move::Clone { .. })
    }

    #[inline]
    pub fn is_jump(&self) -> bool {
        matches!(self, Move::Jump { .. })
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    #[inline]
    pub fn source(&self) -> Option<Square> {
        match *self {
            Move::Clone { from, .. } | Move::Jump { from, .. } => Some(from),
            Move::Pass => None,
        }
    }

    #[inline]
    pub fn destination(&self) -> Option<Square> {
        match *self {
            Move::Clone { to, .. } | Move::Jump { to, .. } => Some(to),
            Move::Pass => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Clone { from, to } | Move::Jump { from, to } => write!(f, "{from}-{to}"),
            Move::Pass => f.write_str("pass"),
        }
    }
}

impl FromStr for Move {
    type Err = AtaxxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass);
        }
        let (from, to) = token
            .split_once('-')
            .ok_or_else(|| AtaxxError::MalformedNotation(s.to_string()))?;
        // A cell token with stray spaces inside the move is malformed too.
        if from.len() != 2 || to.len() != 2 {
            return Err(AtaxxError::MalformedNotation(s.to_string()));
        }
        let from: Square = from.parse().map_err(|_| AtaxxError::MalformedNotation(s.to_string()))?;
        let to: Square = to.parse().map_err(|_| AtaxxError::MalformedNotation(s.to_string()))?;
        Move::new(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_clone_classification() {
        assert!(is_clone(sq("c1"), sq("d2")));
        assert!(is_clone(sq("b1"), sq("b2")));
        assert!(!is_clone(sq("c1"), sq("c1")));
        assert!(!is_clone(sq("c1"), sq("c3")));
        assert!(!is_clone(sq("a2"), sq("a2")));
        assert!(!is_clone(sq("d5"), sq("f5")));
    }

    #[test]
    fn test_jump_classification() {
        assert!(is_jump(sq("c1"), sq("d3")));
        assert!(is_jump(sq("c1"), sq("c3")));
        assert!(is_jump(sq("a3"), sq("c3")));
        assert!(is_jump(sq("d6"), sq("f6")));
        assert!(!is_jump(sq("c4"), sq("d3")));
        assert!(!is_jump(sq("b2"), sq("b5")));
        assert!(!is_jump(sq("a3"), sq("b4")));
        assert!(!is_jump(sq("d6"), sq("e7")));
    }

    #[test]
    fn test_classification_matches_chebyshev_distance() {
        for a in Square::all() {
            for b in Square::all() {
                let dc = (a.col() as i32 - b.col() as i32).abs();
                let dr = (a.row() as i32 - b.row() as i32).abs();
                let d = dc.max(dr);
                assert_eq!(is_clone(a, b), d == 1, "{a} {b}");
                assert_eq!(is_jump(a, b), d == 2, "{a} {b}");
                assert!(!(is_clone(a, b) && is_jump(a, b)));
            }
        }
    }

    #[test]
    fn test_new_rejects_bad_shapes() {
        assert!(matches!(
            Move::new(sq("c1"), sq("c1")),
            Err(AtaxxError::IllegalMove { reason: MoveRejection::BadShape, .. })
        ));
        assert!(Move::new(sq("b2"), sq("b5")).is_err());
        assert!(Move::new(sq("a1"), sq("g7")).is_err());
        assert_eq!(
            Move::new(sq("c1"), sq("d2")).unwrap(),
            Move::Clone { from: sq("c1"), to: sq("d2") }
        );
        assert!(Move::new(sq("c1"), sq("d3")).unwrap().is_jump());
    }

    #[test]
    fn test_parse_notation() {
        let mv: Move = "c2-d3".parse().unwrap();
        assert!(mv.is_clone());
        assert_eq!(mv.source(), Some(sq("c2")));
        assert_eq!(mv.destination(), Some(sq("d3")));
        assert_eq!(mv.to_string(), "c2-d3");

        assert_eq!("pass".parse::<Move>().unwrap(), Move::Pass);
        assert_eq!("PASS".parse::<Move>().unwrap(), Move::Pass);
        assert_eq!(" Pass\n".parse::<Move>().unwrap(), Move::Pass);
        assert_eq!(Move::Pass.to_string(), "pass");
    }

    #[test]
    fn test_parse_malformed() {
        for bad in ["", "c2", "c2d3", "c2-", "h1-h2", "c0-c1", "c2-d8", "C2-D3", "c2 - d3", "c2-d3-e4"] {
            assert!(
                matches!(bad.parse::<Move>(), Err(AtaxxError::MalformedNotation(_))),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_well_formed_but_bad_shape() {
        assert!(matches!(
            "b2-b5".parse::<Move>(),
            Err(AtaxxError::IllegalMove { reason: MoveRejection::BadShape, .. })
        ));
    }
}
