//! Attack tables for move generation.
//!
//! Leaper attacks are table lookups. Sliding attacks are computed with the
//! Kogge-Stone occluded fill from [`Bitboard::sliding_attacks`], which works
//! on whole sets of sliders at once; the per-square ray, between and line
//! masks below back the check and pin logic.

mod tables;

pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use once_cell::sync::Lazy;

use crate::board::types::{Bitboard, Color, Direction, Square};

/// Number of steps from each square to the board edge, `[direction][square]`.
pub(crate) static RAY_DISTANCE: Lazy<[[u8; 64]; 8]> = Lazy::new(|| {
    let mut dist = [[0u8; 64]; 8];
    for dir in Direction::ALL {
        let (dr, df) = dir.delta();
        for sq in Square::all() {
            let mut steps = 0u8;
            let (mut r, mut f) = (sq.rank() as isize + dr, sq.file() as isize + df);
            while Square::try_new(r, f).is_some() {
                steps += 1;
                r += dr;
                f += df;
            }
            dist[dir.index()][sq.index()] = steps;
        }
    }
    dist
});

/// Full ray from each square to the edge (exclusive of the square),
/// `[direction][square]`.
pub(crate) static RAYS: Lazy<[[Bitboard; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[Bitboard::EMPTY; 64]; 8];
    for dir in Direction::ALL {
        for sq in Square::all() {
            let origin = Bitboard::from_square(sq);
            rays[dir.index()][sq.index()] = origin.sliding_attacks(!origin, dir);
        }
    }
    rays
});

/// `(between, line)` masks for every square pair, indexed `a * 64 + b`.
/// Both are empty when the squares do not share a rank, file or diagonal.
static SEGMENTS: Lazy<Vec<(Bitboard, Bitboard)>> = Lazy::new(|| {
    let mut segments = vec![(Bitboard::EMPTY, Bitboard::EMPTY); 64 * 64];
    for a in Square::all() {
        for dir in Direction::ALL {
            let forward = RAYS[dir.index()][a.index()];
            for b in forward {
                let beyond_b = RAYS[dir.index()][b.index()];
                let between = forward & !beyond_b & !Bitboard::from_square(b);
                let back = RAYS[opposite(dir).index()][a.index()];
                let line = forward | back | Bitboard::from_square(a);
                segments[a.index() * 64 + b.index()] = (between, line);
            }
        }
    }
    segments
});

const fn opposite(dir: Direction) -> Direction {
    match dir {
        Direction::North => Direction::South,
        Direction::South => Direction::North,
        Direction::East => Direction::West,
        Direction::West => Direction::East,
        Direction::NorthEast => Direction::SouthWest,
        Direction::SouthWest => Direction::NorthEast,
        Direction::NorthWest => Direction::SouthEast,
        Direction::SouthEast => Direction::NorthWest,
    }
}

#[inline]
pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Squares a pawn of `color` on `sq` attacks.
#[inline]
pub(crate) fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

#[inline]
pub(crate) fn ray_distance(dir: Direction, sq: Square) -> u8 {
    RAY_DISTANCE[dir.index()][sq.index()]
}

/// Squares strictly between `a` and `b`.
#[inline]
pub(crate) fn between(a: Square, b: Square) -> Bitboard {
    SEGMENTS[a.index() * 64 + b.index()].0
}

/// The full rank, file or diagonal through `a` and `b`.
#[inline]
pub(crate) fn line(a: Square, b: Square) -> Bitboard {
    SEGMENTS[a.index() * 64 + b.index()].1
}

/// Attacks of every slider in `sliders` along `dirs`, stopping at (and
/// including) the first occupied square.
#[inline]
pub(crate) fn slider_attack_set(sliders: Bitboard, occupancy: Bitboard, dirs: &[Direction]) -> Bitboard {
    let empty = !occupancy;
    dirs.iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | sliders.sliding_attacks(empty, dir))
}

#[inline]
pub(crate) fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    slider_attack_set(Bitboard::from_square(sq), occupancy, &Direction::ORTHOGONAL)
}

#[inline]
pub(crate) fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    slider_attack_set(Bitboard::from_square(sq), occupancy, &Direction::DIAGONAL)
}

#[inline]
pub(crate) fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    slider_attack_set(Bitboard::from_square(sq), occupancy, &Direction::ALL)
}
