//! Legal move generation.
//!
//! Every call computes, for the side being generated:
//! - the opponent's attack set with our king lifted off the board, so a king
//!   cannot step back along a checking ray;
//! - the checkers and, with a single checker, the check mask (checker plus
//!   the squares between it and the king);
//! - the pinned pieces and the union of their pin rays.
//!
//! Per-piece generators then only emit moves inside those constraints, so the
//! output is the exact legal set with no make/unmake filtering.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{
    between, bishop_attacks, king_attacks, knight_attacks, line, pawn_attacks, ray_distance,
    rook_attacks, slider_attack_set, KING_ATTACKS, KNIGHT_ATTACKS,
};
use super::{Bitboard, Board, Color, Direction, Move, MoveList, Piece, Square};

/// Which moves a generation pass emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GenMode {
    All,
    /// Captures only: en passant and capture-promotions included,
    /// quiet promotions and castling excluded.
    Captures,
}

/// Check and pin state for one generation pass.
pub(crate) struct MoveGenContext {
    pub(crate) us: Color,
    pub(crate) them: Color,
    pub(crate) king: Square,
    pub(crate) enemy: Bitboard,
    pub(crate) occupied: Bitboard,
    /// Squares the opponent attacks, computed with our king removed
    pub(crate) attacked: Bitboard,
    pub(crate) checkers: Bitboard,
    /// Destinations that resolve the current check (all squares when not in check)
    pub(crate) check_mask: Bitboard,
    pub(crate) pinned: Bitboard,
    pub(crate) pin_rays: Bitboard,
    /// Destinations allowed by the mode, before check and pin filtering
    pub(crate) targets: Bitboard,
    pub(crate) en_passant: Option<Square>,
    pub(crate) mode: GenMode,
}

impl MoveGenContext {
    #[inline]
    pub(crate) fn in_double_check(&self) -> bool {
        self.checkers.has_many()
    }

    /// Destinations a non-king piece on `from` may move to.
    #[inline]
    pub(crate) fn allowed(&self, from: Square) -> Bitboard {
        let mask = self.check_mask & self.targets;
        if self.pinned.contains(from) {
            mask & self.pin_rays & line(self.king, from)
        } else {
            mask
        }
    }
}

impl Board {
    /// Every square attacked by `color`, given `occupancy` for slider blocking.
    pub(crate) fn attacks_by(&self, color: Color, occupancy: Bitboard) -> Bitboard {
        let pawns = self.pieces(Piece::Pawn, color);
        let mut attacks = match color {
            Color::White => pawns.shift_north_east() | pawns.shift_north_west(),
            Color::Black => pawns.shift_south_east() | pawns.shift_south_west(),
        };

        for sq in self.pieces(Piece::Knight, color) {
            attacks |= KNIGHT_ATTACKS[sq.index()];
        }
        for sq in self.pieces(Piece::King, color) {
            attacks |= KING_ATTACKS[sq.index()];
        }

        let queens = self.pieces(Piece::Queen, color);
        let diagonal = self.pieces(Piece::Bishop, color) | queens;
        let orthogonal = self.pieces(Piece::Rook, color) | queens;
        attacks |= slider_attack_set(diagonal, occupancy, &Direction::DIAGONAL);
        attacks |= slider_attack_set(orthogonal, occupancy, &Direction::ORTHOGONAL);
        attacks
    }

    /// Pieces of color `by` attacking `sq`, given `occupancy` for slider blocking.
    pub(crate) fn attackers_to(&self, sq: Square, by: Color, occupancy: Bitboard) -> Bitboard {
        let queens = self.pieces_of_type(Piece::Queen);
        let attackers = (pawn_attacks(!by, sq) & self.pieces_of_type(Piece::Pawn))
            | (knight_attacks(sq) & self.pieces_of_type(Piece::Knight))
            | (king_attacks(sq) & self.pieces_of_type(Piece::King))
            | (bishop_attacks(sq, occupancy) & (self.pieces_of_type(Piece::Bishop) | queens))
            | (rook_attacks(sq, occupancy) & (self.pieces_of_type(Piece::Rook) | queens));
        attackers & self.color_occupancy(by)
    }

    pub(crate) fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.attackers_to(sq, by, self.occupied).is_nonempty()
    }

    /// True if `color`'s king is attacked.
    pub(crate) fn king_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, !color))
    }

    /// True if the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.king_in_check(self.side_to_move)
    }

    /// Pinned pieces of `us` and the union of their pin rays (king exclusive,
    /// pinner inclusive), found by walking the eight rays out of the king.
    fn pins(&self, us: Color, king: Square) -> (Bitboard, Bitboard) {
        let mut pinned = Bitboard::EMPTY;
        let mut pin_rays = Bitboard::EMPTY;

        for dir in Direction::ALL {
            let (dr, df) = dir.delta();
            let step = dr * 8 + df;
            let mut sq = king;
            let mut walked = Bitboard::EMPTY;
            let mut candidate: Option<Square> = None;

            for _ in 0..ray_distance(dir, king) {
                sq = Square::from_index((sq.index() as isize + step) as usize);
                walked = walked.with(sq);
                match self.piece_at(sq) {
                    None => {}
                    Some((color, _)) if color == us => {
                        if candidate.is_some() {
                            break;
                        }
                        candidate = Some(sq);
                    }
                    Some((_, piece)) => {
                        let aligned = piece == Piece::Queen
                            || (dir.is_diagonal() && piece == Piece::Bishop)
                            || (!dir.is_diagonal() && piece == Piece::Rook);
                        if let (true, Some(pinned_sq)) = (aligned, candidate) {
                            pinned = pinned.with(pinned_sq);
                            pin_rays |= walked;
                        }
                        break;
                    }
                }
            }
        }

        (pinned, pin_rays)
    }

    /// Build the check and pin state for generating `us`'s moves.
    /// Returns `None` if `us` has no king.
    pub(crate) fn movegen_context(
        &self,
        us: Color,
        mode: GenMode,
        en_passant: Option<Square>,
    ) -> Option<MoveGenContext> {
        let king = self.king_square(us)?;
        let them = !us;
        let own = self.color_occupancy(us);
        let enemy = self.color_occupancy(them);
        let occupied = self.occupied;

        let attacked = self.attacks_by(them, occupied.without(king));
        let checkers = self.attackers_to(king, them, occupied);
        let check_mask = match checkers.lsb() {
            None => Bitboard::ALL,
            Some(_) if checkers.has_many() => Bitboard::EMPTY,
            Some(checker) => checkers | between(king, checker),
        };
        let (pinned, pin_rays) = self.pins(us, king);
        let targets = match mode {
            GenMode::All => !own,
            GenMode::Captures => enemy,
        };

        Some(MoveGenContext {
            us,
            them,
            king,
            enemy,
            occupied,
            attacked,
            checkers,
            check_mask,
            pinned,
            pin_rays,
            targets,
            en_passant,
            mode,
        })
    }

    /// Legal moves for `us` as if it were to move.
    pub(crate) fn generate_for(
        &self,
        us: Color,
        mode: GenMode,
        en_passant: Option<Square>,
    ) -> MoveList {
        let mut moves = MoveList::with_capacity(64);
        let Some(ctx) = self.movegen_context(us, mode, en_passant) else {
            return moves;
        };

        self.generate_king_moves(&ctx, &mut moves);
        if ctx.in_double_check() {
            return moves;
        }

        self.generate_pawn_moves(&ctx, &mut moves);
        self.generate_knight_moves(&ctx, &mut moves);
        self.generate_slider_moves(&ctx, &mut moves);
        moves
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        self.generate_for(self.side_to_move, GenMode::All, self.en_passant_target)
    }

    /// Alias of [`Board::generate_moves`].
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.generate_moves()
    }

    /// Legal captures for the side to move, en passant and capture-promotions included.
    #[must_use]
    pub fn generate_captures(&self) -> MoveList {
        self.generate_for(self.side_to_move, GenMode::Captures, self.en_passant_target)
    }

    /// Number of legal moves `color` would have if it were to move.
    pub(crate) fn mobility(&self, color: Color) -> usize {
        let en_passant = if color == self.side_to_move {
            self.en_passant_target
        } else {
            None
        };
        self.generate_for(color, GenMode::All, en_passant).len()
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && self.generate_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && self.generate_moves().is_empty()
    }

    /// Push `from -> to`, expanding into the four promotions on the last rank.
    #[inline]
    pub(crate) fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square) {
        if to.rank() == 0 || to.rank() == 7 {
            for piece in Piece::PROMOTIONS {
                moves.push(Move::new_promotion(from, to, piece));
            }
        } else {
            moves.push(Move::new(from, to));
        }
    }
}
