//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Performance tests for move generation
//! - `draw.rs` - Draw detection (50-move, repetition) and game history
//! - `make_unmake.rs` - Make/unmake move correctness and hashing
//! - `edge_cases.rs` - Special positions, notation and parse errors
//! - `proptest.rs` - Property-based tests
//! - `search.rs` - Search behaviour and table interaction

mod draw;
mod make_unmake;
