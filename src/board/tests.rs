use super::*;
use crate::error::{AtaxxError, MoveRejection, SetupRejection};
use crate::rules::{Move, MOVE_OFFSETS, NEIGHBOR_OFFSETS};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

#[test]
fn test_side_opposite() {
    assert_eq!(Side::Red.opposite(), Side::Blue);
    assert_eq!(Side::Blue.opposite(), Side::Red);
}

#[test]
fn test_piece_opposite() {
    assert_eq!(Piece::Red.opposite(), Some(Piece::Blue));
    assert_eq!(Piece::Blue.opposite(), Some(Piece::Red));
    assert_eq!(Piece::Empty.opposite(), None);
    assert_eq!(Piece::Blocked.opposite(), None);
    assert_eq!(Piece::from(Side::Blue).side(), Some(Side::Blue));
}

#[test]
fn test_square_only_on_board() {
    assert_eq!(Square::try_new(6, 0).map(|s| (s.col(), s.row())), Some((6, 0)));
    for (col, row) in [(-1, 0), (0, -1), (7, 0), (0, 7), (200, 3)] {
        assert_eq!(Square::try_new(col, row), None, "({col}, {row})");
    }
    assert!(Square::all().all(|s| s.col() < 7 && s.row() < 7));
}

#[test]
fn test_square_notation() {
    let s = sq("c2");
    assert_eq!((s.col(), s.row()), (2, 1));
    assert_eq!(s.to_string(), "c2");
    assert_eq!(sq(" g7 "), Square::new(6, 6));
    for bad in ["", "h1", "a0", "a8", "A1", "a", "a11", "1a"] {
        assert!(
            matches!(bad.parse::<Square>(), Err(AtaxxError::MalformedNotation(_))),
            "{bad:?}"
        );
    }
}

#[test]
fn test_square_index_round_trip() {
    for s in Square::all() {
        assert_eq!(Square::from_index(s.to_index()), Some(s));
    }
    assert_eq!(Square::all().count(), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(sq("a1").to_index(), BORDER * STRIDE + BORDER);
    assert_eq!(sq("g7").to_index(), (BORDER + 6) * STRIDE + BORDER + 6);
}

#[test]
fn test_square_scan_order() {
    let order: Vec<String> = Square::all().map(|s| s.to_string()).collect();
    assert_eq!(order[0], "a7");
    assert_eq!(order[6], "g7");
    assert_eq!(order[7], "a6");
    assert_eq!(order[48], "g1");
}

#[test]
fn test_padded_layout() {
    assert_eq!(STRIDE, 11);
    assert_eq!(PADDED_CELLS, 121);

    let board = Board::new();
    assert!(board.sentinels_intact());

    // Every clone, jump and neighbor offset from every playable cell stays in
    // the store, and leaves the playable area only onto a blocked sentinel.
    let mut offsets: Vec<isize> = NEIGHBOR_OFFSETS.to_vec();
    offsets.extend(MOVE_OFFSETS.iter().map(|&(dc, dr)| dr as isize * STRIDE as isize + dc as isize));
    for s in Square::all() {
        for &off in &offsets {
            let idx = s.to_index() as isize + off;
            assert!(idx >= 0 && (idx as usize) < PADDED_CELLS, "{s} {off}");
            let idx = idx as usize;
            if Square::from_index(idx).is_none() {
                assert_eq!(board.at(idx), Piece::Blocked, "{s} {off}");
            }
        }
    }
}

#[test]
fn test_initial_layout() {
    let board = Board::new();
    assert_eq!(board.content(sq("a7")), Piece::Red);
    assert_eq!(board.content(sq("g1")), Piece::Red);
    assert_eq!(board.content(sq("a1")), Piece::Blue);
    assert_eq!(board.content(sq("g7")), Piece::Blue);
    let empty = Square::all().filter(|&s| board.content(s) == Piece::Empty).count();
    assert_eq!(empty, 45);
    assert_eq!(board.count(Side::Red), 2);
    assert_eq!(board.count(Side::Blue), 2);
    assert_eq!(board.side_to_move(), Side::Red);
    assert!(board.in_setup());
}

#[test]
fn test_set_blocker() {
    let mut board = Board::new();
    board.set_blocker(sq("d4")).unwrap();
    assert_eq!(board.content(sq("d4")), Piece::Blocked);

    assert_eq!(
        board.set_blocker(sq("d4")),
        Err(AtaxxError::IllegalSetup { square: sq("d4"), reason: SetupRejection::NotEmpty })
    );
    assert!(board.set_blocker(sq("a7")).is_err());
    assert_eq!(board.content(sq("a7")), Piece::Red);

    board.apply(mv("a7-a6")).unwrap();
    assert!(!board.in_setup());
    assert_eq!(
        board.set_blocker(sq("c3")),
        Err(AtaxxError::IllegalSetup { square: sq("c3"), reason: SetupRejection::GameStarted })
    );
    assert_eq!(board.content(sq("c3")), Piece::Empty);
}

#[test]
fn test_blocked_cell_is_not_a_destination() {
    let mut board = Board::new();
    board.set_blocker(sq("b6")).unwrap();
    assert!(!board.is_legal(mv("a7-b6")));
    assert!(board.is_legal(mv("a7-b7")));
}

#[test]
fn test_clone_adds_a_piece() {
    let mut board = Board::new();
    let captured = board.apply(mv("a7-b6")).unwrap();
    assert!(captured.is_empty());
    assert_eq!(board.content(sq("a7")), Piece::Red);
    assert_eq!(board.content(sq("b6")), Piece::Red);
    assert_eq!(board.count(Side::Red), 3);
    assert_eq!(board.count(Side::Blue), 2);
    assert_eq!(board.side_to_move(), Side::Blue);
    assert_eq!(board.moves_played(), 1);
}

#[test]
fn test_jump_relocates_a_piece() {
    let mut board = Board::new();
    board.apply(mv("a7-c5")).unwrap();
    assert_eq!(board.content(sq("a7")), Piece::Empty);
    assert_eq!(board.content(sq("c5")), Piece::Red);
    assert_eq!(board.count(Side::Red), 2);
    assert_eq!(board.side_to_move(), Side::Blue);
}

#[test]
fn test_capture_exactly_three() {
    let mut board = Board::empty();
    board.put(sq("d4"), Piece::Red);
    for s in ["c6", "d6", "e6"] {
        board.put(sq(s), Piece::Blue);
    }
    // Two away from d5: must not flip.
    for s in ["b5", "d7", "f7", "b3"] {
        board.put(sq(s), Piece::Blue);
    }

    let mut captured = board.apply(mv("d4-d5")).unwrap();
    captured.sort_by_key(|s| s.col());
    assert_eq!(captured, vec![sq("c6"), sq("d6"), sq("e6")]);

    for s in ["c6", "d6", "e6", "d5", "d4"] {
        assert_eq!(board.content(sq(s)), Piece::Red, "{s}");
    }
    for s in ["b5", "d7", "f7", "b3"] {
        assert_eq!(board.content(sq(s)), Piece::Blue, "{s}");
    }
    assert_eq!(board.count(Side::Red), 5);
    assert_eq!(board.count(Side::Blue), 4);
}

#[test]
fn test_capture_does_not_cascade() {
    let mut board = Board::empty();
    board.put(sq("a4"), Piece::Red);
    // A chain of Blue pieces running away from b4.
    for s in ["c4", "d4", "e4", "f4"] {
        board.put(sq(s), Piece::Blue);
    }
    let captured = board.apply(mv("a4-b4")).unwrap();
    assert_eq!(captured, vec![sq("c4")]);
    assert_eq!(board.content(sq("d4")), Piece::Blue);
    assert_eq!(board.content(sq("e4")), Piece::Blue);
}

#[test]
fn test_jump_captures_too() {
    let mut board = Board::empty();
    board.put(sq("b2"), Piece::Red);
    board.put(sq("e4"), Piece::Blue);
    board.put(sq("c5"), Piece::Blue);
    let captured = board.apply(mv("b2-d4")).unwrap();
    assert_eq!(captured, vec![sq("e4"), sq("c5")]);
    assert_eq!(board.content(sq("b2")), Piece::Empty);
    assert_eq!(board.content(sq("c5")), Piece::Red);
    assert_eq!(board.count(Side::Red), 3);
    assert_eq!(board.count(Side::Blue), 0);
}

#[test]
fn test_capture_at_board_edge() {
    let mut board = Board::empty();
    board.put(sq("a3"), Piece::Red);
    board.put(sq("b1"), Piece::Blue);
    board.put(sq("g2"), Piece::Blue); // adjacent in a flat 7-wide layout
    board.apply(mv("a3-a2")).unwrap();
    assert_eq!(board.content(sq("b1")), Piece::Red);
    assert_eq!(board.content(sq("g2")), Piece::Blue);
    assert!(board.sentinels_intact());
}

#[test]
fn test_illegal_moves_rejected() {
    let mut board = Board::new();
    let before = board.clone();

    // Source belongs to the side not on move.
    assert_eq!(
        board.apply(mv("a1-a2")),
        Err(AtaxxError::IllegalMove { notation: "a1-a2".into(), reason: MoveRejection::NotOwned })
    );
    // Empty source.
    assert!(!board.is_legal(mv("d4-d5")));
    // Occupied destination.
    board.apply(mv("a7-a6")).unwrap();
    board.apply(mv("a1-a2")).unwrap();
    let mid = board.clone();
    assert_eq!(
        board.apply(mv("a7-a6")),
        Err(AtaxxError::IllegalMove { notation: "a7-a6".into(), reason: MoveRejection::Occupied })
    );
    assert_eq!(board, mid);

    // Shape can only be wrong for hand-built values.
    let stretched = Move::Clone { from: sq("a7"), to: sq("a5") };
    assert!(matches!(
        board.apply(stretched),
        Err(AtaxxError::IllegalMove { reason: MoveRejection::BadShape, .. })
    ));
    assert_eq!(board, mid);
    assert_ne!(board, before);
}

#[test]
fn test_pass_only_when_stuck() {
    let mut board = Board::new();
    assert_eq!(
        board.apply(Move::Pass),
        Err(AtaxxError::IllegalMove { notation: "pass".into(), reason: MoveRejection::PassNotAllowed })
    );

    let mut stuck = Board::empty();
    stuck.put(sq("d4"), Piece::Blue);
    stuck.put(sq("a1"), Piece::Red);
    for s in ["a2", "b1", "b2", "a3", "b3", "c3", "c2", "c1"] {
        stuck.put(sq(s), Piece::Blocked);
    }
    assert!(stuck.is_legal(Move::Pass));
    let snapshot: Vec<Piece> = Square::all().map(|s| stuck.content(s)).collect();
    assert!(stuck.apply(Move::Pass).unwrap().is_empty());
    assert_eq!(stuck.side_to_move(), Side::Blue);
    assert_eq!(Square::all().map(|s| stuck.content(s)).collect::<Vec<_>>(), snapshot);
}

#[test]
fn test_clone_is_independent() {
    let original = Board::new();
    let mut copy = original.clone();
    copy.set_blocker(sq("d4")).unwrap();
    copy.apply(mv("a7-b6")).unwrap();
    copy.apply(mv("a1-b2")).unwrap();

    assert_eq!(original, Board::new());
    assert_eq!(original.content(sq("b6")), Piece::Empty);
    assert_eq!(original.content(sq("d4")), Piece::Empty);
    assert_eq!(original.count(Side::Red), 2);
    assert_eq!(original.side_to_move(), Side::Red);
    assert!(original.in_setup());
}

#[test]
fn test_counts_follow_moves() {
    let mut board = Board::new();
    let moves = ["a7-a6", "a1-b1", "g1-f1", "g7-f6", "a6-a5", "a1-a2", "g1-g2", "b1-b2"];
    for notation in moves {
        let mover = board.side_to_move();
        let m = mv(notation);
        let own_before = board.count(mover);
        let opp_before = board.count(mover.opposite());
        let captured = board.apply(m).unwrap().len() as u32;

        let grown = if m.is_clone() { 1 } else { 0 };
        assert_eq!(board.count(mover), own_before + grown + captured, "{notation}");
        assert_eq!(board.count(mover.opposite()), opp_before - captured, "{notation}");
    }
}

#[test]
fn test_score_and_display() {
    let mut board = Board::new();
    assert_eq!(board.score(), "Red 2 - Blue 2");
    assert_eq!(board.status(), "Red 2 - Blue 2, Red to move");
    board.set_blocker(sq("d4")).unwrap();
    board.apply(mv("a7-b6")).unwrap();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "7  r - - - - - b");
    assert_eq!(lines[1], "6  - r - - - - -");
    assert_eq!(lines[3], "4  - - - X - - -");
    assert_eq!(lines[6], "1  b - - - - - r");
    assert_eq!(lines[7], "   a b c d e f g");
}
