//! Precomputed attack tables for leaper pieces (knights, kings, pawns).

use once_cell::sync::Lazy;

use crate::board::types::{Bitboard, Square};

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Squares reachable from `sq` by any of the (rank, file) deltas.
fn leaper_mask(sq: Square, deltas: &[(isize, isize)]) -> Bitboard {
    let r = sq.rank() as isize;
    let f = sq.file() as isize;
    deltas
        .iter()
        .filter_map(|&(dr, df)| Square::try_new(r + dr, f + df))
        .fold(Bitboard::EMPTY, Bitboard::with)
}

fn leaper_table(deltas: &[(isize, isize)]) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (sq, slot) in Square::all().zip(attacks.iter_mut()) {
        *slot = leaper_mask(sq, deltas);
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// Pawn capture targets, indexed `[color][square]`.
pub(crate) static PAWN_ATTACKS: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    [
        leaper_table(&[(1, -1), (1, 1)]),
        leaper_table(&[(-1, -1), (-1, 1)]),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_knight_attack_counts() {
        assert_eq!(KNIGHT_ATTACKS[Square::A1.index()].popcount(), 2);
        assert_eq!(KNIGHT_ATTACKS[sq("b1").index()].popcount(), 3);
        assert_eq!(KNIGHT_ATTACKS[sq("e4").index()].popcount(), 8);
        assert!(KNIGHT_ATTACKS[sq("g1").index()].contains(sq("f3")));
    }

    #[test]
    fn test_king_attack_counts() {
        assert_eq!(KING_ATTACKS[Square::H8.index()].popcount(), 3);
        assert_eq!(KING_ATTACKS[Square::E1.index()].popcount(), 5);
        assert_eq!(KING_ATTACKS[sq("d5").index()].popcount(), 8);
    }

    #[test]
    fn test_pawn_attacks_by_color() {
        let white = PAWN_ATTACKS[0][sq("a2").index()];
        assert_eq!(white, Bitboard::from_square(sq("b3")));
        let black = PAWN_ATTACKS[1][sq("e7").index()];
        assert_eq!(black, Bitboard::from_square(sq("d6")).with(sq("f6")));
        assert!(PAWN_ATTACKS[0][sq("c8").index()].is_empty());
    }
}
