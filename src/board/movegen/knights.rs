use super::super::attack_tables::knight_attacks;
use super::super::{Board, Move, MoveList, Piece};
use super::MoveGenContext;

impl Board {
    pub(crate) fn generate_knight_moves(&self, ctx: &MoveGenContext, moves: &mut MoveList) {
        // A pinned knight can never stay on its pin line.
        for from in self.pieces(Piece::Knight, ctx.us) & !ctx.pinned {
            for to in knight_attacks(from) & ctx.allowed(from) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
