//! Zobrist hashing for chess positions.
//!
//! Provides incrementally-updatable 64-bit position hashes for transposition
//! tables. The keys are an explicit value: boards hold them behind an `Arc`, so
//! positions hashed with the same keys share one allocation and positions
//! built from the same seed produce identical fingerprints.

use rand::prelude::*;

use crate::board::{CastlingRights, Color, Piece, Square};

/// Seed used by [`ZobristKeys::default`].
pub const DEFAULT_SEED: u64 = 1234567890;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    piece_keys: [[[u64; 64]; 2]; 6],
    black_to_move_key: u64,
    // castling_keys[bit]: K, Q, k, q
    castling_keys: [u64; 4],
    // en_passant_keys[file_index] (only file matters for EP target)
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    /// Draw a full key set from a `StdRng` seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [0; 4];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for key in &mut castling_keys {
            *key = rng.gen();
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece(&self, piece: Piece, color: Color, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn black_to_move(&self) -> u64 {
        self.black_to_move_key
    }

    /// XOR of the keys for every right held.
    #[inline]
    #[must_use]
    pub fn castling(&self, rights: CastlingRights) -> u64 {
        rights
            .iter_bits()
            .fold(0, |acc, bit| acc ^ self.castling_keys[bit])
    }

    /// Key for an en-passant target on `file` (0-7).
    #[inline]
    #[must_use]
    pub fn en_passant(&self, file: usize) -> u64 {
        self.en_passant_keys[file]
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        ZobristKeys::new(DEFAULT_SEED)
    }
}
