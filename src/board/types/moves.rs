//! Move type and scored move lists.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

const FROM_MASK: u16 = 0x3F;
const TO_SHIFT: u16 = 6;
const PROMO_SHIFT: u16 = 12;

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-14: promotion piece (0 = none, otherwise `Piece::index()`)
///
/// A move carries no board context. Castling is the king's two-file move and
/// en passant is the pawn's diagonal step onto the en-passant target; the
/// board recognises both when the move is made.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move(from.0 as u16 | ((to.0 as u16) << TO_SHIFT))
    }

    /// Create a promotion move. Pawns and kings are not valid promotion pieces.
    #[inline]
    #[must_use]
    pub const fn new_promotion(from: Square, to: Square, piece: Piece) -> Self {
        debug_assert!(!matches!(piece, Piece::Pawn | Piece::King));
        Move(Move::new(from, to).0 | ((piece.index() as u16) << PROMO_SHIFT))
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square((self.0 & FROM_MASK) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square(((self.0 >> TO_SHIFT) & FROM_MASK) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match (self.0 >> PROMO_SHIFT) & 0x7 {
            0 => None,
            idx => Piece::from_index(idx as usize),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        (self.0 >> PROMO_SHIFT) != 0
    }

    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn from_u16(value: u16) -> Self {
        Move(value)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// A move together with its ordering score.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScoredMove {
    pub(crate) mv: Move,
    pub(crate) score: i32,
}

/// Moves with ordering scores, consumed by incremental selection.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScoredMoveList {
    moves: Vec<ScoredMove>,
}

impl ScoredMoveList {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        ScoredMoveList {
            moves: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move, score: i32) {
        self.moves.push(ScoredMove { mv, score });
    }

    pub(crate) fn len(&self) -> usize {
        self.moves.len()
    }

    /// Partial sort: swap the best move from `start` onwards into `start` and
    /// return it. Moves past a cutoff are never sorted.
    #[inline]
    pub(crate) fn pick_best(&mut self, start: usize) -> Option<ScoredMove> {
        let tail = self.moves.get(start..)?;
        let (offset, _) = tail
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.score.cmp(&b.score).then(ib.cmp(ia)))?;
        self.moves.swap(start, start + offset);
        Some(self.moves[start])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_move_packing() {
        let mv = Move::new(sq("e2"), sq("e4"));
        assert_eq!(mv.from(), sq("e2"));
        assert_eq!(mv.to(), sq("e4"));
        assert_eq!(mv.promotion(), None);
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_promotion_packing() {
        for piece in Piece::PROMOTIONS {
            let mv = Move::new_promotion(sq("b7"), sq("a8"), piece);
            assert_eq!(mv.promotion(), Some(piece));
            assert!(mv.is_promotion());
            assert_eq!(mv.from(), sq("b7"));
            assert_eq!(mv.to(), sq("a8"));
        }
        assert_eq!(
            Move::new_promotion(sq("e7"), sq("e8"), Piece::Knight).to_string(),
            "e7e8n"
        );
    }

    #[test]
    fn test_move_equality_is_by_value() {
        let a = Move::new(sq("g1"), sq("f3"));
        let b = Move::from_u16(a.as_u16());
        assert_eq!(a, b);
        assert_ne!(a, Move::new(sq("f3"), sq("g1")));
    }

    #[test]
    fn test_pick_best_is_stable_for_ties() {
        let mut list = ScoredMoveList::with_capacity(3);
        let first = Move::new(sq("a2"), sq("a3"));
        let second = Move::new(sq("b2"), sq("b3"));
        let third = Move::new(sq("c2"), sq("c3"));
        list.push(first, 5);
        list.push(second, 10);
        list.push(third, 10);

        assert_eq!(list.pick_best(0).map(|s| s.mv), Some(second));
        assert_eq!(list.pick_best(1).map(|s| s.mv), Some(third));
        assert_eq!(list.pick_best(2).map(|s| s.mv), Some(first));
        assert!(list.pick_best(3).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_move_serializes_as_packed_value() {
        let mv = Move::new_promotion(sq("b7"), sq("a8"), Piece::Queen);
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, mv.as_u16().to_string());
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
    }
}
