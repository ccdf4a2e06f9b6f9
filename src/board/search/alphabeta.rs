//! Core search implementation.
//!
//! Negamax alpha-beta over a `Game`, so that make/unmake keeps the
//! repetition counts current. Results are cached in the transposition table
//! keyed by the position fingerprint.

mod iterative;
mod quiescence;

use std::time::Instant;

use crate::tt::Bound;

use super::constants::{DRAW_SCORE, MATE_SCORE, MAX_DEPTH};
use super::move_order::order_moves;
use super::{SearchLimits, SearchParams, SearchState, SearchStats};
use crate::board::{Game, Move};

/// Search context for a single search
pub(crate) struct SearchContext<'a> {
    pub(crate) game: &'a mut Game,
    pub(crate) state: &'a mut SearchState,
    pub(crate) params: SearchParams,
    pub(crate) target_depth: u32,
    pub(crate) start_time: Instant,
    pub(crate) deadline: Option<Instant>,
    pub(crate) stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(
        game: &'a mut Game,
        state: &'a mut SearchState,
        limits: &SearchLimits,
    ) -> Self {
        let start_time = Instant::now();
        let params = state.params.clone();
        SearchContext {
            game,
            state,
            params,
            target_depth: limits.depth.clamp(1, MAX_DEPTH),
            start_time,
            deadline: limits.time_limit.map(|limit| start_time + limit),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Score of a position without legal moves, `depth` plies above the horizon.
    /// Mates closer to the root score further from zero.
    #[inline]
    fn terminal_score(&self, depth: u32) -> i32 {
        if self.game.board().is_in_check() {
            -(MATE_SCORE + depth as i32)
        } else {
            DRAW_SCORE
        }
    }

    #[inline]
    fn evaluate(&self) -> i32 {
        self.game.board().evaluate_with(self.params.mobility_weight)
    }

    /// Fail-hard negamax. `ply` is the distance from the root.
    pub(crate) fn negamax(&mut self, depth: u32, mut alpha: i32, beta: i32, ply: u32) -> i32 {
        self.stats.nodes += 1;
        self.stats.seldepth = self.stats.seldepth.max(ply);

        let moves = self.game.board().generate_moves();
        if moves.is_empty() {
            return self.terminal_score(depth);
        }
        if self.game.is_draw() {
            return DRAW_SCORE;
        }

        let key = self.game.board().hash();
        let mut tt_move = None;
        if let Some(entry) = self.state.tt.probe(key).filter(|e| e.key == key) {
            tt_move = entry.best_move;
            if entry.depth >= depth {
                let cutoff = match entry.bound {
                    Bound::Exact => true,
                    Bound::LowerBound => entry.score >= beta,
                    Bound::UpperBound => entry.score <= alpha,
                };
                if cutoff {
                    self.stats.tt_cutoffs += 1;
                    return entry.score;
                }
            }
        }

        if depth == 0 {
            return self.quiescence(alpha, beta, 0, ply);
        }

        let mut ordered = order_moves(self.game.board(), &moves, tt_move);
        let mut best_move: Option<Move> = None;

        for i in 0..ordered.len() {
            let Some(scored) = ordered.pick_best(i) else {
                break;
            };
            let mv = scored.mv;

            self.game.make_move(mv);
            let score = -self.negamax(depth - 1, -beta, -alpha, ply + 1);
            self.game.unmake_move(1);

            if score >= beta {
                self.state
                    .tt
                    .store(key, depth, Bound::LowerBound, score, Some(mv));
                return score;
            }
            if score > alpha {
                alpha = score;
                best_move = Some(mv);
            }
        }

        let bound = if best_move.is_some() {
            Bound::Exact
        } else {
            Bound::UpperBound
        };
        self.state.tt.store(key, depth, bound, alpha, best_move);
        alpha
    }

    /// Follow table best moves from the current position, checking each for
    /// legality and stopping at the first repeated position.
    fn extract_pv(&mut self, max_len: usize) -> Vec<Move> {
        let mut pv = Vec::with_capacity(max_len);
        let mut seen = Vec::with_capacity(max_len);

        while pv.len() < max_len {
            let key = self.game.board().hash();
            if seen.contains(&key) {
                break;
            }
            seen.push(key);

            let Some(mv) = self
                .state
                .tt
                .probe(key)
                .filter(|e| e.key == key)
                .and_then(|e| e.best_move)
            else {
                break;
            };
            if !self.game.board().generate_moves().contains(&mv) {
                break;
            }

            pv.push(mv);
            self.game.make_move(mv);
        }

        self.game.unmake_move(pv.len());
        pv
    }
}
