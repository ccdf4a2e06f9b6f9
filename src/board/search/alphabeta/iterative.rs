use crate::tt::Bound;

use super::super::constants::INFINITY;
use super::super::move_order::order_moves;
use super::super::SearchResult;
use super::SearchContext;
use crate::board::Move;

impl SearchContext<'_> {
    /// Root moves in initial search order, the stored best move first.
    fn root_moves(&mut self) -> Vec<Move> {
        let key = self.game.board().hash();
        let tt_move = self
            .state
            .tt
            .probe(key)
            .filter(|e| e.key == key)
            .and_then(|e| e.best_move);

        let board = self.game.board();
        let moves = board.generate_moves();
        let mut ordered = order_moves(board, &moves, tt_move);
        (0..ordered.len())
            .filter_map(|i| ordered.pick_best(i))
            .map(|scored| scored.mv)
            .collect()
    }

    /// Iterative deepening from depth 1 to the target depth.
    ///
    /// After each iteration the best root move is swapped to the front so the
    /// next iteration searches it first. The deadline is checked between root
    /// moves; an interrupted iteration is discarded unless it is the first.
    pub(crate) fn iterative_deepening(mut self) -> SearchResult {
        let mut root_moves = self.root_moves();
        let mut result = SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            pv: Vec::new(),
            stats: self.stats,
        };

        if root_moves.is_empty() {
            result.score = self.terminal_score(self.target_depth);
            return self.finish(result);
        }

        let root_key = self.game.board().hash();

        'deepening: for depth in 1..=self.target_depth {
            let mut alpha = -INFINITY;
            let mut best: Option<(usize, i32)> = None;

            for (i, &mv) in root_moves.iter().enumerate() {
                if (depth > 1 || i > 0) && self.deadline_passed() {
                    if let (0, Some((idx, score))) = (result.depth, best) {
                        result.best_move = Some(root_moves[idx]);
                        result.score = score;
                        result.depth = depth;
                    }
                    #[cfg(feature = "logging")]
                    log::debug!("deadline reached during depth {depth} after {i} root moves");
                    break 'deepening;
                }

                self.game.make_move(mv);
                let score = -self.negamax(depth - 1, -INFINITY, -alpha, 1);
                self.game.unmake_move(1);

                if best.is_none() || score > alpha {
                    alpha = score;
                    best = Some((i, score));
                }
            }

            let Some((idx, score)) = best else {
                break;
            };
            root_moves.swap(0, idx);
            let best_move = root_moves[0];
            self.state
                .tt
                .store(root_key, depth, Bound::Exact, score, Some(best_move));

            result.best_move = Some(best_move);
            result.score = score;
            result.depth = depth;

            #[cfg(feature = "logging")]
            log::debug!(
                "depth {depth} score {score} nodes {} best {best_move} time {:?}",
                self.stats.total_nodes(),
                self.start_time.elapsed()
            );
        }

        result.pv = self.extract_pv(result.depth as usize);
        if result.pv.first() != result.best_move.as_ref() {
            result.pv = result.best_move.into_iter().collect();
        }
        self.finish(result)
    }

    fn finish(mut self, mut result: SearchResult) -> SearchResult {
        self.stats.tt = self.state.tt.stats();

        #[cfg(feature = "logging")]
        log::trace!(
            "tt writes {} hits {} clashes {} cutoffs {} hashfull {}",
            self.stats.tt.writes,
            self.stats.tt.hits,
            self.stats.tt.clashes,
            self.stats.tt_cutoffs,
            self.state.tt.hashfull_per_mille()
        );

        result.stats = self.stats;
        self.state.stats = self.stats;
        result
    }
}
