//! Draw detection tests.

use crate::board::{Board, Game};

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        game.make_move_str(text)
            .unwrap_or_else(|err| panic!("{text} should be legal: {err}"));
    }
}

#[test]
fn test_fen_halfmove_parsing() {
    let board = Board::from_fen("8/8/8/8/8/8/8/K1k5 w - - 57 1");
    assert_eq!(board.halfmove_clock(), 57);
    assert!(!board.is_fifty_move_draw());
}

#[test]
fn test_fifty_move_rule_draw() {
    let board = Board::from_fen("8/8/8/8/8/8/8/K1k5 w - - 100 1");
    assert!(board.is_fifty_move_draw());
    assert!(Game::new(board).is_draw());
}

#[test]
fn test_halfmove_resets_on_pawn_move() {
    let mut game = Game::new(Board::from_fen("8/8/8/8/8/8/4P3/K1k5 w - - 99 1"));
    play(&mut game, &["e2e4"]);
    assert_eq!(game.board().halfmove_clock(), 0);
    assert!(!game.is_draw());
}

#[test]
fn test_threefold_repetition() {
    let mut game = Game::default();
    assert_eq!(game.repetition_count(), 1);

    play(&mut game, &["g1f3", "g8f6", "f3g1", "f6g8"]);
    assert_eq!(game.repetition_count(), 2);
    assert!(!game.is_draw());

    play(&mut game, &["g1f3", "g8f6", "f3g1", "f6g8"]);
    assert_eq!(game.repetition_count(), 3);
    assert!(game.is_draw());

    // Back to the position after the second Ng1, first reached after ply 3.
    assert_eq!(game.unmake_move(1), 1);
    assert_eq!(game.repetition_count(), 2);
    assert!(!game.is_draw());
}

#[test]
fn test_unmake_restores_repetition_counts() {
    let mut game = Game::default();
    play(&mut game, &["e2e4", "e7e5", "g1f3"]);
    assert_eq!(game.unmake_move(3), 3);
    assert!(game.board() == &Board::new());
    assert_eq!(game.repetition_count(), 1);
}

#[test]
fn test_checkmate_is_not_stalemate() {
    let board = Board::from_fen("7k/7Q/7K/8/8/8/8/8 b - - 0 1");
    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());
}

#[test]
fn test_stalemate_is_not_checkmate() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(board.is_stalemate());
    assert!(!board.is_checkmate());
}
