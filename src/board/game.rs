//! A board plus the moves that led to it.
//!
//! `Board` only knows the current position; `Game` keeps every applied move
//! with its undo record so it can take moves back and count repetitions.

use std::collections::HashMap;

use super::error::MoveParseError;
use super::{Board, Move, UnmakeInfo};

/// Occurrence count per fingerprint over the positions a game has passed through.
#[derive(Clone, Debug, Default)]
struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    fn increment(&mut self, hash: u64) {
        *self.counts.entry(hash).or_insert(0) += 1;
    }

    fn decrement(&mut self, hash: u64) {
        if let Some(count) = self.counts.get_mut(&hash) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&hash);
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: Vec<(Move, UnmakeInfo)>,
    repetitions: RepetitionTable,
}

impl Game {
    /// Start a game from `board`; its position counts as the first occurrence.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let mut repetitions = RepetitionTable::default();
        repetitions.increment(board.hash());
        Game {
            board,
            history: Vec::new(),
            repetitions,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Moves applied so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|(mv, _)| *mv)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Apply a move that is legal in the current position.
    pub fn make_move(&mut self, mv: Move) {
        let info = self.board.make_move(mv);
        self.history.push((mv, info));
        self.repetitions.increment(self.board.hash());
    }

    /// Parse coordinate notation against the legal moves and apply the match.
    pub fn make_move_str(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.board.parse_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }

    /// Take back the last `n` moves. Returns how many were actually reverted,
    /// which is fewer than `n` once the history runs out.
    pub fn unmake_move(&mut self, n: usize) -> usize {
        let mut reverted = 0;
        while reverted < n {
            let Some((mv, info)) = self.history.pop() else {
                break;
            };
            self.repetitions.decrement(self.board.hash());
            self.board.unmake_move(mv, info);
            reverted += 1;
        }
        reverted
    }

    /// How many times the current position has occurred, this time included.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.get(self.board.hash())
    }

    /// Draw by the fifty-move rule or threefold repetition.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.board.is_fifty_move_draw() || self.repetition_count() >= 3
    }
}

impl From<Board> for Game {
    fn from(board: Board) -> Self {
        Game::new(board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Board::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, moves: &[&str]) {
        for text in moves {
            game.make_move_str(text).unwrap();
        }
    }

    #[test]
    fn test_repetition_count_tracks_knight_shuffle() {
        let mut game = Game::default();
        assert_eq!(game.repetition_count(), 1);

        play(&mut game, &["g1f3", "g8f6", "f3g1", "f6g8"]);
        assert_eq!(game.repetition_count(), 2);
        assert!(!game.is_draw());

        play(&mut game, &["g1f3", "g8f6", "f3g1", "f6g8"]);
        assert_eq!(game.repetition_count(), 3);
        assert!(game.is_draw());
    }

    #[test]
    fn test_unmake_n_restores_board_and_counts() {
        let start = Board::new();
        let mut game = Game::new(start.clone());
        play(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6"]);
        assert_eq!(game.len(), 4);

        assert_eq!(game.unmake_move(2), 2);
        assert_eq!(
            game.board().to_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
        );

        assert_eq!(game.unmake_move(10), 2);
        assert_eq!(game.board(), &start);
        assert_eq!(game.repetition_count(), 1);
        assert!(game.is_empty());
    }

    #[test]
    fn test_moves_iterates_in_order() {
        let mut game = Game::default();
        play(&mut game, &["d2d4", "d7d5"]);
        let moves: Vec<String> = game.moves().map(|m| m.to_string()).collect();
        assert_eq!(moves, vec!["d2d4", "d7d5"]);
    }

    #[test]
    fn test_fifty_move_draw() {
        let game = Game::new(Board::from_fen("8/8/8/8/8/8/8/K1k5 w - - 100 80"));
        assert!(game.is_draw());
    }
}
