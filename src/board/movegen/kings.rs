use super::super::attack_tables::{between, king_attacks};
use super::super::{Board, Move, MoveList, Piece, Square};
use super::{GenMode, MoveGenContext};

impl Board {
    pub(crate) fn generate_king_moves(&self, ctx: &MoveGenContext, moves: &mut MoveList) {
        let from = ctx.king;
        for to in king_attacks(from) & ctx.targets & !ctx.attacked {
            moves.push(Move::new(from, to));
        }

        if ctx.mode == GenMode::All && ctx.checkers.is_empty() {
            self.generate_castling_moves(ctx, moves);
        }
    }

    /// Castling needs the right, the rook on its corner, an empty path between
    /// king and rook, and no attack on the squares the king crosses or lands on.
    /// The start square is covered by the caller's not-in-check test.
    fn generate_castling_moves(&self, ctx: &MoveGenContext, moves: &mut MoveList) {
        let rank = ctx.us.back_rank();
        let king_home = Square::new(rank, 4);
        if ctx.king != king_home {
            return;
        }

        for kingside in [true, false] {
            if !self.castling_rights.has(ctx.us, kingside) {
                continue;
            }
            let (rook_file, transit_file, landing_file) = if kingside { (7, 5, 6) } else { (0, 3, 2) };
            let rook_sq = Square::new(rank, rook_file);
            if self.piece_at(rook_sq) != Some((ctx.us, Piece::Rook)) {
                continue;
            }
            if (between(king_home, rook_sq) & ctx.occupied).is_nonempty() {
                continue;
            }
            let transit = Square::new(rank, transit_file);
            let landing = Square::new(rank, landing_file);
            if ctx.attacked.contains(transit) || ctx.attacked.contains(landing) {
                continue;
            }
            moves.push(Move::new(king_home, landing));
        }
    }
}
