use super::{Bitboard, Board, Color, Piece};

impl Board {
    /// Check that the bitboards, mailbox and fingerprint agree.
    ///
    /// # Panics
    /// Panics describing the first inconsistency found.
    pub(crate) fn assert_consistent(&self) {
        let mut union = Bitboard::EMPTY;
        for (i, a) in self.pieces.iter().enumerate() {
            assert!(
                (union & *a).is_empty(),
                "piece set {i} overlaps another piece set"
            );
            union |= *a;
        }
        assert_eq!(union, self.occupied, "piece sets do not cover occupancy");

        let [white, black] = self.colors;
        assert!((white & black).is_empty(), "color sets overlap");
        assert_eq!(white | black, self.occupied, "color sets do not cover occupancy");

        for sq in self.occupied {
            let (color, piece) = self
                .mailbox[sq.index()]
                .unwrap_or_else(|| panic!("mailbox empty on occupied {sq}"));
            assert!(self.colors[color.index()].contains(sq), "{sq} color mismatch");
            assert!(self.pieces[piece.index()].contains(sq), "{sq} piece mismatch");
        }
        let mailbox_count = self.mailbox.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(mailbox_count as u32, self.occupied.popcount(), "stray mailbox entry");

        for color in Color::BOTH {
            assert_eq!(
                self.pieces(Piece::King, color).popcount(),
                1,
                "{color} must have exactly one king"
            );
        }

        assert_eq!(self.hash, self.compute_hash(), "incremental hash drifted");
    }
}
