use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Board, Move, MoveList, Piece, Square};
use super::MoveGenContext;

impl Board {
    pub(crate) fn generate_slider_moves(&self, ctx: &MoveGenContext, moves: &mut MoveList) {
        let sliders: [(Piece, fn(Square, Bitboard) -> Bitboard); 3] = [
            (Piece::Bishop, bishop_attacks),
            (Piece::Rook, rook_attacks),
            (Piece::Queen, queen_attacks),
        ];

        for (piece, attacks) in sliders {
            for from in self.pieces(piece, ctx.us) {
                for to in attacks(from, ctx.occupied) & ctx.allowed(from) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }
}
