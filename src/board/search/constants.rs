//! Search constants.

// ============================================================================
// SCORES
// ============================================================================

/// Base magnitude of a checkmate score. A mate found with `d` plies of depth
/// still to search scores `-(MATE_SCORE + d)` for the mated side.
pub const MATE_SCORE: i32 = 30_000;

/// Window bound strictly outside every reachable score.
pub(crate) const INFINITY: i32 = 32_000;

/// Deepest iteration the search will run.
pub(crate) const MAX_DEPTH: u32 = 64;

/// Scores with absolute value >= this are checkmate scores
pub(crate) const MATE_THRESHOLD: i32 = MATE_SCORE;

pub(crate) const DRAW_SCORE: i32 = 0;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores are tried earlier: TT move > captures > promotions > quiet.

/// Hash move (from transposition table) - highest priority
pub(crate) const TT_MOVE_SCORE: i32 = 1 << 20;

/// Floor for captures, ranked above it by MVV-LVA
pub(crate) const CAPTURE_SCORE: i32 = 100_000;

/// Floor for quiet promotions, ranked above it by the promoted piece
pub(crate) const PROMOTION_SCORE: i32 = 50_000;
