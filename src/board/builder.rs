//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use bitchess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .piece(Square::new(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use std::sync::Arc;

use crate::zobrist::ZobristKeys;

use super::error::BuilderError;
use super::{Board, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    keys: Option<Arc<ZobristKeys>>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            keys: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        builder.pieces = board
            .occupied()
            .iter()
            .filter_map(|sq| board.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
            .collect();
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Hash the built board with these keys instead of the default set.
    #[must_use]
    pub fn zobrist_keys(mut self, keys: Arc<ZobristKeys>) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Build the board.
    ///
    /// Fails unless each side has exactly one king and no pawn stands on the
    /// first or last rank.
    pub fn build(self) -> Result<Board, BuilderError> {
        let keys = self.keys.unwrap_or_default();
        let mut board = Board::empty(keys);

        for (square, color, piece) in self.pieces {
            if piece == Piece::Pawn && (square.rank() == 0 || square.rank() == 7) {
                return Err(BuilderError::PawnOnBackRank {
                    notation: square.to_string(),
                });
            }
            board.set_piece(square, color, piece);
        }

        for color in Color::BOTH {
            let count = board.pieces(Piece::King, color).popcount();
            if count != 1 {
                return Err(BuilderError::InvalidKingCount { color, count });
            }
        }

        board.side_to_move = self.side_to_move;
        let waiting = !self.side_to_move;
        if board.king_in_check(waiting) {
            return Err(BuilderError::OpponentInCheck { color: waiting });
        }

        board.castling_rights = self.castling_rights;
        board.en_passant_target = self.en_passant_target;
        board.halfmove_clock = self.halfmove_clock;
        board.fullmove_number = self.fullmove_number.max(1);
        board.hash = board.compute_hash();

        Ok(board)
    }
}
