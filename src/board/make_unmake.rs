use super::{Board, Color, Move, Piece, Square, UnmakeInfo};

impl Board {
    /// Place a piece and fold it into the hash.
    #[inline]
    fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        self.set_piece(sq, color, piece);
        self.hash ^= self.keys.piece(piece, color, sq);
    }

    /// Remove a piece and fold it out of the hash.
    #[inline]
    fn take(&mut self, sq: Square, color: Color, piece: Piece) {
        self.remove_piece(sq, color, piece);
        self.hash ^= self.keys.piece(piece, color, sq);
    }

    /// True if `mv` is a king's two-file castling step on this board.
    #[inline]
    pub(crate) fn is_castling(&self, mv: Move) -> bool {
        self.piece_on(mv.from()) == Some(Piece::King)
            && mv.from().file().abs_diff(mv.to().file()) == 2
    }

    /// True if `mv` is a pawn capturing en passant on this board.
    #[inline]
    pub(crate) fn is_en_passant(&self, mv: Move) -> bool {
        self.en_passant_target == Some(mv.to())
            && mv.from().file() != mv.to().file()
            && self.piece_on(mv.from()) == Some(Piece::Pawn)
            && self.piece_at(mv.to()).is_none()
    }

    /// The piece `mv` would capture, including the pawn taken en passant.
    #[inline]
    pub(crate) fn captured_piece(&self, mv: Move) -> Option<Piece> {
        if self.is_en_passant(mv) {
            Some(Piece::Pawn)
        } else {
            self.piece_on(mv.to())
        }
    }

    #[inline]
    pub(crate) fn is_capture(&self, mv: Move) -> bool {
        self.captured_piece(mv).is_some()
    }

    /// Rook start and end squares for a castling king landing on `king_to`.
    #[inline]
    fn castling_rook_squares(king_to: Square) -> (Square, Square) {
        let rank = king_to.rank();
        if king_to.file() == 6 {
            (Square::new(rank, 7), Square::new(rank, 5))
        } else {
            (Square::new(rank, 0), Square::new(rank, 3))
        }
    }

    /// Clear the right tied to a rook home corner when anything leaves or lands on it.
    #[inline]
    fn clear_corner_right(&mut self, sq: Square) {
        match sq {
            Square::A1 => self.castling_rights.remove(Color::White, false),
            Square::H1 => self.castling_rights.remove(Color::White, true),
            Square::A8 => self.castling_rights.remove(Color::Black, false),
            Square::H8 => self.castling_rights.remove(Color::Black, true),
            _ => {}
        }
    }

    /// Apply `mv`, which must be legal in this position.
    ///
    /// # Panics
    /// Panics if the origin square is empty.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let us = self.side_to_move;
        let them = !us;
        let from = mv.from();
        let to = mv.to();
        let (_, moved_piece) = self.piece_at(from).expect("make_move 'from' empty");

        let is_en_passant = self.is_en_passant(mv);
        let is_castling = self.is_castling(mv);

        let mut info = UnmakeInfo {
            moved_piece,
            captured: None,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            previous_hash: self.hash,
        };

        if let Some(old_ep) = self.en_passant_target {
            self.hash ^= self.keys.en_passant(old_ep.file());
        }
        self.hash ^= self.keys.castling(self.castling_rights);

        if is_en_passant {
            let capture_sq = Square::new(from.rank(), to.file());
            self.take(capture_sq, them, Piece::Pawn);
            info.captured = Some((Piece::Pawn, capture_sq));
        } else if let Some((cap_color, cap_piece)) = self.piece_at(to) {
            debug_assert_eq!(cap_color, them, "capturing own piece on {to}");
            self.take(to, cap_color, cap_piece);
            info.captured = Some((cap_piece, to));
        }

        self.take(from, us, moved_piece);
        self.put(to, us, mv.promotion().unwrap_or(moved_piece));

        if is_castling {
            let (rook_from, rook_to) = Self::castling_rook_squares(to);
            self.take(rook_from, us, Piece::Rook);
            self.put(rook_to, us, Piece::Rook);
        }

        self.en_passant_target = None;
        if moved_piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            let ep_sq = Square::new((from.rank() + to.rank()) / 2, from.file());
            self.en_passant_target = Some(ep_sq);
            self.hash ^= self.keys.en_passant(ep_sq.file());
        }

        if moved_piece == Piece::King {
            self.castling_rights.remove_color(us);
        }
        self.clear_corner_right(from);
        self.clear_corner_right(to);
        self.hash ^= self.keys.castling(self.castling_rights);

        if moved_piece == Piece::Pawn || info.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.ply += 1;

        self.side_to_move = them;
        self.hash ^= self.keys.black_to_move();

        #[cfg(debug_assertions)]
        self.assert_consistent();

        info
    }

    /// Revert `mv`, restoring the exact position it was made from.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let us = !self.side_to_move;
        let from = mv.from();
        let to = mv.to();

        let placed = mv.promotion().unwrap_or(info.moved_piece);
        self.remove_piece(to, us, placed);
        self.set_piece(from, us, info.moved_piece);

        if info.moved_piece == Piece::King && from.file().abs_diff(to.file()) == 2 {
            let (rook_from, rook_to) = Self::castling_rook_squares(to);
            self.remove_piece(rook_to, us, Piece::Rook);
            self.set_piece(rook_from, us, Piece::Rook);
        }

        if let Some((cap_piece, cap_sq)) = info.captured {
            self.set_piece(cap_sq, !us, cap_piece);
        }

        self.side_to_move = us;
        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.hash = info.previous_hash;
        if us == Color::Black {
            self.fullmove_number -= 1;
        }
        self.ply -= 1;

        #[cfg(debug_assertions)]
        self.assert_consistent();
    }
}
