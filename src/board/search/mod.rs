//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening with the previous best root move searched first
//! - Negamax alpha-beta with transposition table cutoffs
//! - Quiescence search with stand-pat and delta pruning
//! - Move ordering (TT move, MVV-LVA, promotions)

mod alphabeta;
mod constants;
mod move_order;
mod params;

use std::time::Duration;

use crate::tt::{TranspositionTable, TtStats};

use super::{Game, Move};
pub use constants::MATE_SCORE;
use constants::MATE_THRESHOLD;
pub use params::SearchParams;

/// Default transposition table size in MB
pub const DEFAULT_TT_MB: usize = 16;

/// How far a search may go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    /// Deepest iteration to run (at least 1)
    pub depth: u32,
    /// Wall-clock budget, checked between root moves
    pub time_limit: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits::depth(6)
    }
}

impl SearchLimits {
    /// Create a depth-limited search
    #[must_use]
    pub const fn depth(depth: u32) -> Self {
        SearchLimits {
            depth,
            time_limit: None,
        }
    }

    #[must_use]
    pub const fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Main search nodes
    pub nodes: u64,
    /// Quiescence nodes
    pub qnodes: u64,
    /// Deepest ply reached, quiescence included
    pub seldepth: u32,
    /// Nodes answered by a table entry without searching
    pub tt_cutoffs: u64,
    /// Table counters at the end of the search
    pub tt: TtStats,
}

impl SearchStats {
    #[must_use]
    pub fn total_nodes(&self) -> u64 {
        self.nodes + self.qnodes
    }
}

/// Outcome of `find_best_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move of the last completed iteration; `None` only when the root
    /// has no legal move
    pub best_move: Option<Move>,
    /// Score from the side to move's point of view
    pub score: i32,
    /// Depth of the iteration the result comes from
    pub depth: u32,
    /// Principal variation recovered from the table, starting with `best_move`
    pub pv: Vec<Move>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// True if the score announces a forced mate for either side.
    #[must_use]
    pub fn is_mate(&self) -> bool {
        self.score.abs() >= MATE_THRESHOLD
    }
}

/// Search state persisted across searches
pub struct SearchState {
    pub(crate) tt: TranspositionTable,
    pub(crate) params: SearchParams,
    pub(crate) stats: SearchStats,
}

impl SearchState {
    /// State with a table of roughly `tt_mb` megabytes.
    #[must_use]
    pub fn new(tt_mb: usize) -> Self {
        Self::with_table(TranspositionTable::new(tt_mb))
    }

    /// State with a table of exactly `entries` slots.
    #[must_use]
    pub fn with_capacity(entries: usize) -> Self {
        Self::with_table(TranspositionTable::with_capacity(entries))
    }

    fn with_table(tt: TranspositionTable) -> Self {
        SearchState {
            tt,
            params: SearchParams::default(),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut SearchParams {
        &mut self.params
    }

    pub fn set_params(&mut self, params: SearchParams) {
        self.params = params;
    }

    #[must_use]
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    pub fn tt_mut(&mut self) -> &mut TranspositionTable {
        &mut self.tt
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Forget everything learned, as before a new game.
    pub fn clear(&mut self) {
        self.tt.clear();
        self.stats = SearchStats::default();
    }

    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        self.tt.hashfull_per_mille()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(DEFAULT_TT_MB)
    }
}

/// Search `game`'s current position and return the best move found.
///
/// The game is left in the position it was handed in. Table contents carry
/// over between calls on the same `state`.
pub fn find_best_move(
    game: &mut Game,
    state: &mut SearchState,
    limits: &SearchLimits,
) -> SearchResult {
    alphabeta::SearchContext::new(game, state, limits).iterative_deepening()
}
