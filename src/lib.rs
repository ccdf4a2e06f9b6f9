//! Bitboard chess engine core: legal move generation, Zobrist hashing with
//! a transposition table, and iterative-deepening alpha-beta search.
//!
//! # Example
//! ```
//! use bitchess::board::{find_best_move, Game, SearchLimits, SearchState};
//!
//! let mut game = Game::default();
//! let mut state = SearchState::with_capacity(1 << 16);
//! let result = find_best_move(&mut game, &mut state, &SearchLimits::depth(2));
//! assert!(result.best_move.is_some());
//! ```

pub mod board;
pub mod tt;
pub mod zobrist;

pub use board::{Board, Color, Game, Move, Piece, Square};
pub use tt::TranspositionTable;
pub use zobrist::ZobristKeys;
