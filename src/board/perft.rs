//! Move path enumeration for validating the move generator.

use super::{Board, Move};

impl Board {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// The last ply is counted in bulk from the generated list.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let info = self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv, info);
        }

        nodes
    }

    /// Leaf counts below each root move, in generation order.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let moves = self.generate_moves();
        let mut counts = Vec::with_capacity(moves.len());
        for mv in moves {
            let info = self.make_move(mv);
            counts.push((mv, self.perft(depth - 1)));
            self.unmake_move(mv, info);
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "perft divide depth {depth}: {} root moves, {} nodes",
            counts.len(),
            counts.iter().map(|(_, n)| n).sum::<u64>()
        );

        counts
    }
}
