//! Bitboard type and operations.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::square::Square;

/// One of the eight ray directions on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All directions, orthogonals first.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// (rank delta, file delta) of one step in this direction
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (1, -1),
            Direction::SouthEast => (-1, 1),
            Direction::SouthWest => (-1, -1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NorthEast | Direction::NorthWest | Direction::SouthEast | Direction::SouthWest
        )
    }

    /// Squares that would wrap around the board edge when stepping this way.
    #[inline]
    const fn wrap_source(self) -> u64 {
        match self {
            Direction::East | Direction::NorthEast | Direction::SouthEast => Bitboard::FILE_H.0,
            Direction::West | Direction::NorthWest | Direction::SouthWest => Bitboard::FILE_A.0,
            Direction::North | Direction::South => 0,
        }
    }

    /// Squares a wrapped bit would land on after stepping this way.
    #[inline]
    const fn wrap_target(self) -> u64 {
        match self {
            Direction::East | Direction::NorthEast | Direction::SouthEast => Bitboard::FILE_A.0,
            Direction::West | Direction::NorthWest | Direction::SouthWest => Bitboard::FILE_H.0,
            Direction::North | Direction::South => 0,
        }
    }

    /// Raw shift by `steps` squares, no edge masking.
    #[inline]
    const fn raw_shift(self, bb: u64, steps: u32) -> u64 {
        match self {
            Direction::North => bb << (8 * steps),
            Direction::South => bb >> (8 * steps),
            Direction::East => bb << steps,
            Direction::West => bb >> steps,
            Direction::NorthEast => bb << (9 * steps),
            Direction::NorthWest => bb << (7 * steps),
            Direction::SouthEast => bb >> (7 * steps),
            Direction::SouthWest => bb >> (9 * steps),
        }
    }
}

/// A 64-bit bitboard representing a set of squares.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);
}

impl Bitboard {
    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1u64 << sq.0)
    }

    /// Returns an iterator over the squares set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if more than one bit is set
    #[inline]
    #[must_use]
    pub const fn has_many(self) -> bool {
        self.0 & self.0.wrapping_sub(1) != 0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.0) != 0
    }

    /// Least significant set square, if any
    #[inline]
    #[must_use]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square(self.0.trailing_zeros() as u8))
        }
    }

    /// Most significant set square, if any
    #[inline]
    #[must_use]
    pub const fn msb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square(63 - self.0.leading_zeros() as u8))
        }
    }

    #[inline]
    #[must_use]
    pub const fn with(self, sq: Square) -> Self {
        Bitboard(self.0 | (1u64 << sq.0))
    }

    #[inline]
    #[must_use]
    pub const fn without(self, sq: Square) -> Self {
        Bitboard(self.0 & !(1u64 << sq.0))
    }

    /// One step in `dir`. Bits that would wrap across the a/h file edge are
    /// masked off before the shift; bits leaving the top or bottom rank fall off.
    #[inline]
    #[must_use]
    pub const fn shift(self, dir: Direction) -> Self {
        Bitboard(dir.raw_shift(self.0 & !dir.wrap_source(), 1))
    }

    #[inline]
    #[must_use]
    pub const fn shift_north(self) -> Self {
        self.shift(Direction::North)
    }

    #[inline]
    #[must_use]
    pub const fn shift_south(self) -> Self {
        self.shift(Direction::South)
    }

    #[inline]
    #[must_use]
    pub const fn shift_east(self) -> Self {
        self.shift(Direction::East)
    }

    #[inline]
    #[must_use]
    pub const fn shift_west(self) -> Self {
        self.shift(Direction::West)
    }

    #[inline]
    #[must_use]
    pub const fn shift_north_east(self) -> Self {
        self.shift(Direction::NorthEast)
    }

    #[inline]
    #[must_use]
    pub const fn shift_north_west(self) -> Self {
        self.shift(Direction::NorthWest)
    }

    #[inline]
    #[must_use]
    pub const fn shift_south_east(self) -> Self {
        self.shift(Direction::SouthEast)
    }

    #[inline]
    #[must_use]
    pub const fn shift_south_west(self) -> Self {
        self.shift(Direction::SouthWest)
    }

    /// Kogge-Stone occluded fill: floods `self` in `dir` through the `empty`
    /// squares. The result contains the generators and every empty square
    /// reachable from them, but not the blockers.
    #[inline]
    #[must_use]
    pub const fn occluded_fill(self, empty: Bitboard, dir: Direction) -> Self {
        let mut gen = self.0;
        let mut pro = empty.0 & !dir.wrap_target();
        gen |= pro & dir.raw_shift(gen, 1);
        pro &= dir.raw_shift(pro, 1);
        gen |= pro & dir.raw_shift(gen, 2);
        pro &= dir.raw_shift(pro, 2);
        gen |= pro & dir.raw_shift(gen, 4);
        Bitboard(gen)
    }

    /// Sliding attacks from every generator in `dir`, up to and including the
    /// first occupied square.
    #[inline]
    #[must_use]
    pub const fn sliding_attacks(self, empty: Bitboard, dir: Direction) -> Self {
        self.occluded_fill(empty, dir).shift(dir)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard({:#018x})", self.0)
    }
}

/// Iterator over set squares in a Bitboard, lowest index first
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let sq = self.0.lsb()?;
        self.0 .0 &= self.0 .0 - 1;
        Some(sq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
