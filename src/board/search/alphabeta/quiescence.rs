use super::super::move_order::order_moves;
use super::SearchContext;
use crate::board::Piece;

impl SearchContext<'_> {
    /// Capture-only search below the horizon, floored by the static evaluation.
    pub(crate) fn quiescence(&mut self, mut alpha: i32, beta: i32, qdepth: u32, ply: u32) -> i32 {
        self.stats.qnodes += 1;
        self.stats.seldepth = self.stats.seldepth.max(ply);

        let stand_pat = self.evaluate();
        if stand_pat >= beta {
            return stand_pat;
        }

        let margin = self.params.delta_margin;
        // Not even winning a queen would bring us back to alpha.
        if stand_pat + Piece::Queen.value() + margin < alpha {
            return alpha;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }
        if qdepth >= self.params.max_qsearch_depth {
            return alpha;
        }

        let captures = self.game.board().generate_captures();
        let mut ordered = order_moves(self.game.board(), &captures, None);

        for i in 0..ordered.len() {
            let Some(scored) = ordered.pick_best(i) else {
                break;
            };
            let mv = scored.mv;

            let victim = self.game.board().captured_piece(mv).map_or(0, Piece::value);
            let promotion = mv
                .promotion()
                .map_or(0, |piece| piece.value() - Piece::Pawn.value());
            if stand_pat + victim + promotion + margin < alpha {
                continue;
            }

            self.game.make_move(mv);
            let score = -self.quiescence(-beta, -alpha, qdepth + 1, ply + 1);
            self.game.unmake_move(1);

            if score >= beta {
                return score;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
