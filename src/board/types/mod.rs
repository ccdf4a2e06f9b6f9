//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - compact board square representation (u8)
//! - `Bitboard` and `Direction` - 64-bit square sets and the shifts over them
//! - `Move` - packed 16-bit move
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter, Direction};
pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use moves::ScoredMoveList;

/// Move lists are plain vectors.
pub type MoveList = Vec<Move>;
