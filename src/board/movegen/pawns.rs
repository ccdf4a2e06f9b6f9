use super::super::{Bitboard, Board, Color, Move, MoveList, Piece, Square};
use super::{GenMode, MoveGenContext};
use crate::board::attack_tables::pawn_attacks;

impl Board {
    pub(crate) fn generate_pawn_moves(&self, ctx: &MoveGenContext, moves: &mut MoveList) {
        let start_rank = match ctx.us {
            Color::White => 1,
            Color::Black => 6,
        };
        let forward = ctx.us.pawn_direction();

        for from in self.pieces(Piece::Pawn, ctx.us) {
            let allowed = ctx.allowed(from);

            let ahead = |ranks: isize| {
                Square::try_new(from.rank() as isize + ranks * forward, from.file() as isize)
            };
            if ctx.mode == GenMode::All {
                if let Some(one) = ahead(1).filter(|sq| !ctx.occupied.contains(*sq)) {
                    if allowed.contains(one) {
                        Self::push_pawn_move(moves, from, one);
                    }
                    if from.rank() == start_rank {
                        if let Some(two) = ahead(2).filter(|sq| !ctx.occupied.contains(*sq)) {
                            if allowed.contains(two) {
                                moves.push(Move::new(from, two));
                            }
                        }
                    }
                }
            }

            let attacks = pawn_attacks(ctx.us, from);
            for to in attacks & ctx.enemy & allowed {
                Self::push_pawn_move(moves, from, to);
            }

            if let Some(ep) = ctx.en_passant {
                if attacks.contains(ep) && self.en_passant_is_legal(ctx, from, ep) {
                    moves.push(Move::new(from, ep));
                }
            }
        }
    }

    /// Play the capture on a scratch occupancy and look for any attacker of
    /// our king. Covers pins, the rank-wise discovered check through both
    /// pawns, and removing a checking pawn.
    fn en_passant_is_legal(&self, ctx: &MoveGenContext, from: Square, ep: Square) -> bool {
        let captured = Square::new(from.rank(), ep.file());
        if self.piece_at(captured) != Some((ctx.them, Piece::Pawn)) {
            return false;
        }
        let occupancy = ctx.occupied.without(from).without(captured).with(ep);
        let attackers = self.attackers_to(ctx.king, ctx.them, occupancy);
        (attackers & !Bitboard::from_square(captured)).is_empty()
    }
}
