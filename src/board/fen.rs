use std::str::FromStr;
use std::sync::Arc;

use crate::zobrist::ZobristKeys;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, Square};

/// A clock field in canonical decimal: digits only, no sign, no leading zero.
fn parse_clock(field: &str) -> Option<u32> {
    let canonical = !field.is_empty()
        && field.bytes().all(|b| b.is_ascii_digit())
        && (field == "0" || !field.starts_with('0'));
    if canonical {
        field.parse().ok()
    } else {
        None
    }
}

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Accepts the full six fields, or the first four with the clocks
    /// defaulting to `0 1`. Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        Self::try_from_fen_with_keys(fen, Arc::new(ZobristKeys::default()))
    }

    /// Parse a FEN position hashed with the given keys.
    pub fn try_from_fen_with_keys(fen: &str, keys: Arc<ZobristKeys>) -> Result<Self, FenError> {
        let result = Self::parse_fen(fen, keys);
        #[cfg(feature = "logging")]
        if let Err(err) = &result {
            log::debug!("rejected FEN '{fen}': {err}");
        }
        result
    }

    fn parse_fen(fen: &str, keys: Arc<ZobristKeys>) -> Result<Self, FenError> {
        let mut board = Board::empty(keys);
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 4 && parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        // Parse piece placement
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            let mut after_digit = false;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    // An empty run is a single nonzero digit.
                    if skip == 0 || after_digit {
                        return Err(FenError::InvalidEmptyRun {
                            rank: rank + 1,
                            run: rank_str.to_string(),
                        });
                    }
                    file += skip as usize;
                    after_digit = true;
                    continue;
                }
                after_digit = false;
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::WrongFileCount {
                        rank: rank + 1,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(Square::new(rank, file), color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::WrongFileCount {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        for color in Color::BOTH {
            let count = board.pieces(Piece::King, color).popcount();
            if count != 1 {
                return Err(FenError::InvalidKingCount { color, count });
            }
        }

        // Parse side to move
        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let waiting = !board.side_to_move;
        if board.king_in_check(waiting) {
            return Err(FenError::OpponentInCheck { color: waiting });
        }

        board.castling_rights =
            CastlingRights::from_fen(parts[2]).map_err(|char| FenError::InvalidCastling { char })?;

        // The target lies behind a pawn that just double-pushed, so it sits on
        // the mover's sixth rank.
        board.en_passant_target = match parts[3] {
            "-" => None,
            field => {
                let expected_rank = match board.side_to_move {
                    Color::White => 5,
                    Color::Black => 2,
                };
                match field.parse::<Square>() {
                    Ok(sq) if sq.rank() == expected_rank => Some(sq),
                    _ => {
                        return Err(FenError::InvalidEnPassant {
                            found: field.to_string(),
                        })
                    }
                }
            }
        };

        if parts.len() == 6 {
            board.halfmove_clock =
                parse_clock(parts[4]).ok_or_else(|| FenError::InvalidHalfmoveClock {
                    found: parts[4].to_string(),
                })?;
            board.fullmove_number = match parse_clock(parts[5]) {
                Some(n) if n > 0 => n,
                _ => {
                    return Err(FenError::InvalidFullmoveNumber {
                        found: parts[5].to_string(),
                    })
                }
            };
        }

        board.hash = board.compute_hash();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::new(rank, file);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use bitchess::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: text.len() });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from_sq: Square = text[0..2].parse().map_err(|_| invalid_square())?;
        let to_sq: Square = text[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if !matches!(piece, Piece::Pawn | Piece::King) => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from() == from_sq && mv.to() == to_sq && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Parse a coordinate-notation move and make it on the board in one call.
    ///
    /// # Example
    /// ```
    /// use bitchess::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_str("e2e4").unwrap();
    /// board.make_move_str("e7e5").unwrap();
    /// ```
    pub fn make_move_str(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_fen_round_trip() {
        for fen in [
            START_FEN,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 b - - 37 112",
        ] {
            assert_eq!(Board::try_from_fen(fen).unwrap().to_fen(), fen);
        }
    }

    #[test]
    fn test_new_matches_start_fen() {
        assert_eq!(Board::new().to_fen(), START_FEN);
        assert_eq!(Board::new(), Board::from_fen(START_FEN));
    }

    #[test]
    fn test_four_field_fen_defaults_clocks() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").unwrap();
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert!(!board.white_to_move());
        assert_eq!(board.en_passant_target(), Some("e3".parse().unwrap()));
    }

    #[test]
    fn test_fen_error_field_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 2 }));
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0");
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 5 }));
    }

    #[test]
    fn test_fen_error_rank_and_file_counts() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::WrongRankCount { found: 7 }));
        let result = Board::try_from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::WrongFileCount { rank: 7, files: 7 }));
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::WrongFileCount { rank: 6, .. })));
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/04K3 w - - 0 1");
        assert!(matches!(result, Err(FenError::InvalidEmptyRun { rank: 1, .. })));
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/13K3 w - - 0 1");
        assert!(matches!(result, Err(FenError::InvalidEmptyRun { rank: 1, .. })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidPiece { char: 'x' }));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidCastling { char: 'X' }));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
        // White to move: the target must be on rank 6.
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e3 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_clocks() {
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1");
        assert!(matches!(result, Err(FenError::InvalidHalfmoveClock { .. })));
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 0");
        assert!(matches!(result, Err(FenError::InvalidFullmoveNumber { .. })));
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - +7 1");
        assert!(matches!(result, Err(FenError::InvalidHalfmoveClock { .. })));
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 07 1");
        assert!(matches!(result, Err(FenError::InvalidHalfmoveClock { .. })));
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 +3");
        assert!(matches!(result, Err(FenError::InvalidFullmoveNumber { .. })));
    }

    #[test]
    fn test_fen_error_opponent_in_check() {
        // White's king is attacked with Black to move: the rook could take it.
        let result = Board::try_from_fen("4k3/4r3/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(
            result,
            Err(FenError::OpponentInCheck {
                color: Color::White
            })
        );
        // The same placement with White to move is an ordinary check.
        let board = Board::try_from_fen("4k3/4r3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(board.is_in_check());
        assert!(!board
            .generate_moves()
            .iter()
            .any(|mv| board.piece_on(mv.to()) == Some(Piece::King)));
    }

    #[test]
    fn test_fen_error_king_count() {
        let result = Board::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            result,
            Err(FenError::InvalidKingCount {
                color: Color::Black,
                count: 0
            })
        );
        let result = Board::try_from_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1");
        assert!(matches!(
            result,
            Err(FenError::InvalidKingCount {
                color: Color::White,
                count: 2
            })
        ));
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        let rights = board.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_fen_hash_matches_recomputed() {
        let board = Board::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1");
        assert_eq!(board.hash(), board.compute_hash());
    }

    #[test]
    fn test_parse_move_e2e4() {
        let board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), Square::new(1, 4));
        assert_eq!(mv.to(), Square::new(3, 4));
    }

    #[test]
    fn test_parse_move_promotion() {
        let board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = board.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Queen));
    }

    #[test]
    fn test_parse_move_errors() {
        let board = Board::new();
        assert!(matches!(
            board.parse_move("e2"),
            Err(MoveParseError::InvalidLength { .. })
        ));
        assert!(matches!(
            board.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            board.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        let promo_board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        assert_eq!(
            promo_board.parse_move("a7a8p"),
            Err(MoveParseError::InvalidPromotion { char: 'p' })
        );
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = START_FEN.parse().unwrap();
        assert!(board.white_to_move());
    }

    #[test]
    fn test_make_move_str() {
        let mut board = Board::new();
        board.make_move_str("e2e4").unwrap();
        assert!(!board.white_to_move());
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }
}
