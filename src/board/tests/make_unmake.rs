//! Make/unmake move tests.

use crate::board::{Board, CastlingRights, Color, Move, Piece, Square, UnmakeInfo};
use rand::prelude::*;

fn find_move(board: &Board, text: &str) -> Move {
    board
        .parse_move(text)
        .unwrap_or_else(|err| panic!("expected {text} to be legal: {err}"))
}

fn sq(text: &str) -> Square {
    text.parse().unwrap()
}

#[test]
fn test_en_passant_make_unmake() {
    let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
    let mut board = Board::from_fen(fen);
    let original = board.clone();
    let mv = find_move(&board, "e5f6");

    let info = board.make_move(mv);
    assert_eq!(info.captured_piece(), Some(Piece::Pawn));
    assert_eq!(board.piece_at(sq("f5")), None);
    assert_eq!(board.piece_at(sq("f6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.en_passant_target(), None);

    board.unmake_move(mv, info);
    assert!(board == original);
    assert_eq!(board.to_fen(), fen);
}

#[test]
fn test_double_push_sets_en_passant_target() {
    let mut board = Board::new();
    let mv = find_move(&board, "e2e4");
    board.make_move(mv);
    assert_eq!(board.en_passant_target(), Some(sq("e3")));

    let mv = find_move(&board, "g8f6");
    board.make_move(mv);
    assert_eq!(board.en_passant_target(), None);
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let original_hash = board.hash();
    let mv = find_move(&board, "a7a8q");

    let info = board.make_move(mv);
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
    assert_eq!(board.pieces(Piece::Pawn, Color::White).popcount(), 0);

    board.unmake_move(mv, info);
    assert_eq!(board.hash(), original_hash);
    assert_eq!(board.piece_at(sq("a7")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.piece_at(sq("a8")), None);
}

#[test]
fn test_capture_promotion_make_unmake() {
    let mut board = Board::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let original = board.clone();
    let mv = find_move(&board, "a7b8n");

    let info = board.make_move(mv);
    assert_eq!(info.captured_piece(), Some(Piece::Rook));
    assert_eq!(board.piece_at(sq("b8")), Some((Color::White, Piece::Knight)));

    board.unmake_move(mv, info);
    assert!(board == original);
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let original = board.clone();
    let mv = find_move(&board, "e1g1");

    let info = board.make_move(mv);
    assert_eq!(board.piece_at(sq("g1")), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_at(sq("h1")), None);
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(!board.castling_rights().has(Color::White, false));
    assert!(board.castling_rights().has(Color::Black, true));

    board.unmake_move(mv, info);
    assert!(board == original);
}

#[test]
fn test_queenside_castling_for_black() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let mv = find_move(&board, "e8c8");
    board.make_move(mv);
    assert_eq!(board.piece_at(sq("c8")), Some((Color::Black, Piece::King)));
    assert_eq!(board.piece_at(sq("d8")), Some((Color::Black, Piece::Rook)));
    assert_eq!(board.castling_rights().to_fen(), "KQ");
    assert_eq!(board.fullmove_number(), 2);
}

#[test]
fn test_rook_move_and_corner_capture_clear_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    board.make_move(find_move(&board, "a1a8"));
    // White gave up queenside by moving the rook, Black lost it by losing the rook.
    assert_eq!(board.castling_rights().to_fen(), "Kk");
}

#[test]
fn test_rights_never_return_after_unmake_sequence() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    board.make_move(find_move(&board, "h1h2"));
    board.make_move(find_move(&board, "h8h7"));
    board.make_move(find_move(&board, "h2h1"));
    board.make_move(find_move(&board, "h7h8"));
    assert_eq!(board.castling_rights(), {
        let mut rights = CastlingRights::none();
        rights.set(Color::White, false);
        rights.set(Color::Black, false);
        rights
    });
}

#[test]
fn test_clocks_and_ply() {
    let mut board = Board::new();
    board.make_move(find_move(&board, "g1f3"));
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.fullmove_number(), 1);
    assert_eq!(board.ply(), 1);

    board.make_move(find_move(&board, "e7e5"));
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 2);
    assert_eq!(board.ply(), 2);

    board.make_move(find_move(&board, "f3e5"));
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let initial_moves = board.generate_moves();

    for &mv in &initial_moves {
        let info = board.make_move(mv);
        board.unmake_move(mv, info);
    }

    assert_eq!(board.generate_moves(), initial_moves);
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut board = Board::new();
    let initial = board.clone();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();

    for _ in 0..200 {
        let moves = board.generate_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        let info = board.make_move(mv);
        history.push((mv, info));
        assert_eq!(board.hash(), board.compute_hash());
    }

    while let Some((mv, info)) = history.pop() {
        board.unmake_move(mv, info);
        assert_eq!(board.hash(), board.compute_hash());
    }

    assert!(board == initial);
}

#[test]
fn test_transposed_move_orders_hash_equal() {
    let mut a = Board::new();
    for text in ["g1f3", "g8f6", "b1c3"] {
        a.make_move(find_move(&a, text));
    }
    let mut b = Board::new();
    for text in ["b1c3", "g8f6", "g1f3"] {
        b.make_move(find_move(&b, text));
    }
    assert_eq!(a.hash(), b.hash());

    let mut c = Board::new();
    for text in ["b1c3", "b8c6", "g1f3"] {
        c.make_move(find_move(&c, text));
    }
    assert_ne!(a.hash(), c.hash());
}

#[test]
fn test_hash_distinguishes_side_castling_and_en_passant() {
    let base = Board::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1");
    let variants = [
        "r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq - 0 1",
        "r3k2r/8/8/3pP3/8/8/8/R3K2R w Kkq d6 0 1",
        "r3k2r/8/8/3pP3/8/8/8/R3K2R b KQkq - 0 1",
    ];
    for fen in variants {
        assert_ne!(base.hash(), Board::from_fen(fen).hash(), "{fen}");
    }
    // Clocks are not part of the position.
    let clocks = Board::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 7 30");
    assert_eq!(base.hash(), clocks.hash());
}
