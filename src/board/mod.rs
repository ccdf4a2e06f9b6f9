//! Chess board representation and game logic.
//!
//! Uses bitboards for move generation and a mailbox for piece lookup.
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use bitchess::board::{Board, Color, Piece};
//!
//! let board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! assert_eq!(board.pieces(Piece::Pawn, Color::White).popcount(), 8);
//! ```

mod attack_tables;
mod builder;
#[cfg(debug_assertions)]
mod debug;
mod error;
mod eval;
mod fen;
mod game;
mod make_unmake;
mod movegen;
mod perft;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BuilderError, FenError, MoveParseError, SquareError};
pub use game::Game;
pub use state::{Board, UnmakeInfo};
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Direction, Move, MoveList, Piece, Square,
};

pub use search::{
    find_best_move, SearchLimits, SearchParams, SearchResult, SearchState, SearchStats,
    DEFAULT_TT_MB, MATE_SCORE,
};

pub(crate) use types::ScoredMoveList;
