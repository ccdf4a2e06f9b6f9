use std::fmt;
use std::sync::Arc;

use crate::zobrist::ZobristKeys;

use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// Everything `make_move` overwrites, so `unmake_move` can restore it in O(1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) moved_piece: Piece,
    /// Captured piece and the square it stood on (differs from `to` for en passant)
    pub(crate) captured: Option<(Piece, Square)>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_hash: u64,
}

impl UnmakeInfo {
    /// The piece that made the move (a pawn for promotions).
    #[must_use]
    pub fn moved_piece(&self) -> Piece {
        self.moved_piece
    }

    #[must_use]
    pub fn captured_piece(&self) -> Option<Piece> {
        self.captured.map(|(piece, _)| piece)
    }
}

/// A chess position.
///
/// Pieces are held three ways that always agree: one bitboard per piece type,
/// one per color (whose union is `occupied`), and a square-indexed mailbox.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [Bitboard; 6],
    pub(crate) colors: [Bitboard; 2],
    pub(crate) occupied: Bitboard,
    pub(crate) mailbox: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) ply: u32,
    pub(crate) hash: u64,
    pub(crate) keys: Arc<ZobristKeys>,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Board::new_with_keys(Arc::new(ZobristKeys::default()))
    }

    /// The standard starting position hashed with the given keys.
    #[must_use]
    pub fn new_with_keys(keys: Arc<ZobristKeys>) -> Self {
        let mut board = Board::empty(keys);
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square::new(0, file), Color::White, *piece);
            board.set_piece(Square::new(7, file), Color::Black, *piece);
            board.set_piece(Square::new(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square::new(6, file), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board.hash = board.compute_hash();
        board
    }

    pub(crate) fn empty(keys: Arc<ZobristKeys>) -> Self {
        Board {
            pieces: [Bitboard::EMPTY; 6],
            colors: [Bitboard::EMPTY; 2],
            occupied: Bitboard::EMPTY,
            mailbox: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            ply: 0,
            hash: 0,
            keys,
        }
    }

    /// Place a piece without touching the hash. The square must be empty.
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        debug_assert!(self.mailbox[sq.index()].is_none(), "{sq} is occupied");
        let bit = Bitboard::from_square(sq);
        self.pieces[piece.index()] |= bit;
        self.colors[color.index()] |= bit;
        self.occupied |= bit;
        self.mailbox[sq.index()] = Some((color, piece));
    }

    /// Remove a piece without touching the hash.
    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = !Bitboard::from_square(sq);
        self.pieces[piece.index()] &= bit;
        self.colors[color.index()] &= bit;
        self.occupied &= bit;
        self.mailbox[sq.index()] = None;
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.mailbox[sq.index()]
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// Squares holding `piece` of `color`.
    #[inline]
    #[must_use]
    pub fn pieces(&self, piece: Piece, color: Color) -> Bitboard {
        self.pieces[piece.index()] & self.colors[color.index()]
    }

    /// Squares holding `piece` of either color.
    #[inline]
    #[must_use]
    pub fn pieces_of_type(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn color_occupancy(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(Piece::King, color).lsb()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Half-moves made on this board since it was set up.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Incrementally maintained Zobrist fingerprint.
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn zobrist_keys(&self) -> &Arc<ZobristKeys> {
        &self.keys
    }

    /// Total number of pieces on the board, kings and pawns included.
    #[inline]
    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.occupied.popcount()
    }

    /// Fingerprint recomputed from scratch.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        let mut hash = 0u64;

        for sq in self.occupied {
            if let Some((color, piece)) = self.piece_at(sq) {
                hash ^= self.keys.piece(piece, color, sq);
            }
        }

        if self.side_to_move == Color::Black {
            hash ^= self.keys.black_to_move();
        }

        hash ^= self.keys.castling(self.castling_rights);

        if let Some(ep_square) = self.en_passant_target {
            hash ^= self.keys.en_passant(ep_square.file());
        }

        hash
    }

    /// True once a hundred half-moves have passed without a capture or pawn move.
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = match self.piece_at(Square::new(rank, file)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
