//! Move ordering for search.

use super::super::{Board, Move, ScoredMoveList};
use super::constants::{CAPTURE_SCORE, PROMOTION_SCORE, TT_MOVE_SCORE};

/// MVV-LVA: most valuable victim first, least valuable attacker breaking ties.
#[must_use]
pub(crate) fn mvv_lva_score(board: &Board, mv: Move) -> Option<i32> {
    let victim = board.captured_piece(mv)?;
    let attacker = board.piece_on(mv.from())?;
    Some(victim.value() * 10 - attacker.index() as i32)
}

/// Score one move: hash move, then captures, then promotions, then quiet moves.
#[must_use]
pub(crate) fn score_move(board: &Board, mv: Move, tt_move: Option<Move>) -> i32 {
    if tt_move == Some(mv) {
        return TT_MOVE_SCORE;
    }
    let promotion = mv.promotion().map_or(0, |piece| piece.value());
    match mvv_lva_score(board, mv) {
        Some(score) => CAPTURE_SCORE + score + promotion,
        None if mv.is_promotion() => PROMOTION_SCORE + promotion,
        None => 0,
    }
}

/// Scored list for incremental best-first selection with `pick_best`.
#[must_use]
pub(crate) fn order_moves(board: &Board, moves: &[Move], tt_move: Option<Move>) -> ScoredMoveList {
    let mut scored = ScoredMoveList::with_capacity(moves.len());
    for &mv in moves {
        scored.push(mv, score_move(board, mv, tt_move));
    }
    scored
}
