use super::super::eval::DEFAULT_MOBILITY_WEIGHT;

/// Tunable search knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Safety margin for quiescence delta pruning, in centipawns
    pub delta_margin: i32,
    /// Centipawns per move of mobility advantage at full middlegame phase
    pub mobility_weight: i32,
    /// Capture plies quiescence may extend below a leaf
    pub max_qsearch_depth: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            delta_margin: 200,
            mobility_weight: DEFAULT_MOBILITY_WEIGHT,
            max_qsearch_depth: 8,
        }
    }
}
