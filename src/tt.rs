//! Transposition table for caching search results.
//!
//! Uses Zobrist hashes to store and retrieve position evaluations,
//! enabling significant search tree pruning.
//!
//! The table is direct-mapped: a fingerprint owns exactly one slot
//! (`key % capacity`) and a newer store evicts whatever occupied it, unless the
//! occupant is the same position searched at least as deep. Probing returns
//! the raw slot; the caller checks `entry.key` before trusting it.

use std::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bound {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtEntry {
    pub key: u64,
    pub depth: u32,
    pub bound: Bound,
    pub score: i32,
    pub best_move: Option<Move>,
}

/// Diagnostic counters. Monotonic until the table is cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TtStats {
    pub writes: u64,
    pub hits: u64,
    pub clashes: u64,
}

pub struct TranspositionTable {
    slots: Vec<Option<TtEntry>>,
    stats: TtStats,
}

impl TranspositionTable {
    /// Create a table sized to roughly `size_mb` megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let slot_size = mem::size_of::<Option<TtEntry>>();
        let capacity = (size_mb * 1024 * 1024) / slot_size;
        Self::with_capacity(capacity)
    }

    /// Create a table with exactly `capacity` slots (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TranspositionTable {
            slots: vec![None; capacity.max(1)],
            stats: TtStats::default(),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key % self.slots.len() as u64) as usize
    }

    /// Return the occupant of `key`'s slot. It may belong to another position.
    pub fn probe(&mut self, key: u64) -> Option<TtEntry> {
        let entry = self.slots[self.index(key)];
        if matches!(entry, Some(e) if e.key == key) {
            self.stats.hits += 1;
        }
        entry
    }

    /// Store a search result for `key`.
    ///
    /// An existing entry for the same position at equal or greater depth is
    /// kept; anything else in the slot is overwritten.
    pub fn store(
        &mut self,
        key: u64,
        depth: u32,
        bound: Bound,
        score: i32,
        best_move: Option<Move>,
    ) {
        let idx = self.index(key);
        match self.slots[idx] {
            Some(old) if old.key == key && old.depth >= depth => return,
            Some(old) if old.key != key => self.stats.clashes += 1,
            _ => {}
        }
        self.slots[idx] = Some(TtEntry {
            key,
            depth,
            bound,
            score,
            best_move,
        });
        self.stats.writes += 1;
    }

    #[must_use]
    pub fn stats(&self) -> TtStats {
        self.stats
    }

    /// Returns hash table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        // Sample first 1000 slots for efficiency
        let sample_size = self.slots.len().min(1000);
        let occupied = self
            .slots
            .iter()
            .take(sample_size)
            .filter(|slot| slot.is_some())
            .count();
        ((occupied as u64 * 1000) / sample_size as u64) as u32
    }

    /// Clear all entries and reset the counters.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.stats = TtStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x123456789ABCDEF0;

        tt.store(hash, 10, Bound::Exact, 500, None);

        let entry = tt.probe(hash).expect("should find entry");
        assert_eq!(entry.key, hash);
        assert_eq!(entry.depth, 10);
        assert_eq!(entry.score, 500);
        assert_eq!(entry.bound, Bound::Exact);
        assert_eq!(tt.stats(), TtStats { writes: 1, hits: 1, clashes: 0 });
    }

    #[test]
    fn test_probe_returns_foreign_occupant_without_hit() {
        let mut tt = TranspositionTable::with_capacity(16);
        tt.store(3, 4, Bound::Exact, 10, None);

        let entry = tt.probe(19).expect("slot is occupied");
        assert_eq!(entry.key, 3);
        assert_eq!(tt.stats().hits, 0);
        assert!(tt.probe(4).is_none());
    }

    #[test]
    fn test_shallower_store_for_same_key_is_skipped() {
        let mut tt = TranspositionTable::with_capacity(16);
        let mv = Move::new(Square::E1, Square::G1);
        tt.store(5, 6, Bound::Exact, 42, Some(mv));
        tt.store(5, 3, Bound::UpperBound, -7, None);
        tt.store(5, 6, Bound::LowerBound, 0, None);

        let entry = tt.probe(5).unwrap();
        assert_eq!(entry.depth, 6);
        assert_eq!(entry.score, 42);
        assert_eq!(entry.best_move, Some(mv));
        assert_eq!(tt.stats().writes, 1);

        tt.store(5, 7, Bound::LowerBound, 50, None);
        assert_eq!(tt.probe(5).unwrap().depth, 7);
        assert_eq!(tt.stats().writes, 2);
        assert_eq!(tt.stats().clashes, 0);
    }

    #[test]
    fn test_clash_replaces_deeper_entry() {
        let mut tt = TranspositionTable::with_capacity(16);
        tt.store(1, 20, Bound::Exact, 1, None);
        tt.store(17, 1, Bound::Exact, 2, None);

        let entry = tt.probe(17).unwrap();
        assert_eq!(entry.key, 17);
        assert_eq!(entry.depth, 1);
        assert_eq!(tt.stats(), TtStats { writes: 2, hits: 1, clashes: 1 });
    }

    #[test]
    fn test_clear_resets_entries_and_counters() {
        let mut tt = TranspositionTable::with_capacity(8);
        tt.store(1, 1, Bound::Exact, 0, None);
        tt.clear();
        assert!(tt.probe(1).is_none());
        assert_eq!(tt.stats(), TtStats::default());
        assert_eq!(tt.hashfull_per_mille(), 0);
    }
}
