use crate::types::*;

pub const E1: u8 = 4;
pub const E8: u8 = 60;
const A1: u8 = 0;
const H1: u8 = 7;
const A8: u8 = 56;
const H8: u8 = 63;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        CastlingRights {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }
    pub fn none() -> Self {
        CastlingRights {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Everything `make_move` destroys, so `unmake_move` can restore it.
#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

pub fn pawn_dir(c: Color) -> i8 {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}

pub fn back_rank(c: Color) -> i8 {
    match c {
        Color::White => 0,
        Color::Black => 7,
    }
}

pub fn promo_rank(c: Color) -> i8 {
    back_rank(c.other())
}

pub fn king_home(c: Color) -> u8 {
    match c {
        Color::White => E1,
        Color::Black => E8,
    }
}

/// Destination square of the king for a castle of the given side.
pub fn king_castle_to(c: Color, side: CastleSide) -> u8 {
    let file = match side {
        CastleSide::Kingside => 6,
        CastleSide::Queenside => 2,
    };
    sq(file, back_rank(c)).unwrap()
}

/// (from, to) of the rook for a castle of the given side.
pub fn rook_castle_squares(c: Color, side: CastleSide) -> (u8, u8) {
    let rank = back_rank(c);
    let (rf, rt) = match side {
        CastleSide::Kingside => (7, 5),
        CastleSide::Queenside => (0, 3),
    };
    (sq(rf, rank).unwrap(), sq(rt, rank).unwrap())
}

impl Position {
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// All occupied squares of one color, ascending.
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (u8, Piece)> + '_ {
        (0u8..64).filter_map(move |s| match self.board[s as usize] {
            Some(pc) if pc.color == c => Some((s, pc)),
            _ => None,
        })
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.pieces(c)
            .find(|&(_, pc)| pc.kind == PieceKind::King)
            .map(|(s, _)| s)
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // A pawn of `by` attacks `target` from one rank behind it.
        let dr = -pawn_dir(by);
        for df in [-1, 1] {
            if let Some(s) = sq(tf + df, tr + dr)
                && let Some(pc) = self.piece_at(s)
                && pc.color == by
                && pc.kind == PieceKind::Pawn
            {
                return true;
            }
        }

        // Leapers
        for (deltas, kind) in [
            (&KNIGHT_DELTAS, PieceKind::Knight),
            (&KING_DELTAS, PieceKind::King),
        ] {
            for &(df, dr) in deltas {
                if let Some(s) = sq(tf + df, tr + dr)
                    && let Some(pc) = self.piece_at(s)
                    && pc.color == by
                    && pc.kind == kind
                {
                    return true;
                }
            }
        }

        // Sliders
        for (dirs, slider_kind) in [
            (&DIAG_DIRS, PieceKind::Bishop),
            (&ORTHO_DIRS, PieceKind::Rook),
        ] {
            for &(df, dr) in dirs {
                let mut f = tf + df;
                let mut r = tr + dr;
                while let Some(s) = sq(f, r) {
                    if let Some(pc) = self.piece_at(s) {
                        if pc.color == by && (pc.kind == slider_kind || pc.kind == PieceKind::Queen) {
                            return true;
                        }
                        break;
                    }
                    f += df;
                    r += dr;
                }
            }
        }

        false
    }

    pub fn castle_rights(&self, c: Color, side: CastleSide) -> bool {
        match (c, side) {
            (Color::White, CastleSide::Kingside) => self.castling.wk,
            (Color::White, CastleSide::Queenside) => self.castling.wq,
            (Color::Black, CastleSide::Kingside) => self.castling.bk,
            (Color::Black, CastleSide::Queenside) => self.castling.bq,
        }
    }

    /// Squares between king and rook are empty. Says nothing about attacks;
    /// that part is profile-dependent and lives in movegen.
    pub fn castle_path_clear(&self, c: Color, side: CastleSide) -> bool {
        let rank = back_rank(c);
        let files: &[i8] = match side {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        };
        files
            .iter()
            .all(|&f| self.piece_at(sq(f, rank).unwrap()).is_none())
    }

    fn strip_rook_right(&mut self, sq: u8) {
        match sq {
            A1 => self.castling.wq = false,
            H1 => self.castling.wk = false,
            A8 => self.castling.bq = false,
            H8 => self.castling.bk = false,
            _ => {}
        }
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self.piece_at(mv.from).expect("no piece on from-square");
        debug_assert_eq!(moved.kind, mv.kind, "move kind out of sync with board");
        let mut captured = self.piece_at(mv.to);
        let prev_castling = self.castling.clone();
        let prev_ep = self.en_passant;
        let prev_hmc = self.halfmove_clock;
        let prev_fmn = self.fullmove_number;

        self.en_passant = None;

        let mut reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();

        // En-passant capture: the pawn being taken sits behind the
        // destination square, not on it.
        let mut ep_captured_sq = None;
        if mv.class == MoveClass::EnPassant {
            if let Some(cs) = sq(file_of(mv.to), rank_of(mv.to) - pawn_dir(moved.color)) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
                ep_captured_sq = Some(cs);
                reset_hmc = true;
            }
        }

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));

        // Promotion
        if moved.kind == PieceKind::Pawn && rank_of(mv.to) == promo_rank(moved.color) {
            let promo = mv.promo.unwrap_or(PieceKind::Queen);
            self.set_piece(
                mv.to,
                Some(Piece {
                    color: moved.color,
                    kind: promo,
                }),
            );
            reset_hmc = true;
        }

        // Castling relocates the rook as part of the same move.
        let mut rook_move = None;
        if let Some(side) = mv.class.castle_side() {
            let (rf, rt) = rook_castle_squares(moved.color, side);
            let rook = self
                .piece_at(rf)
                .expect("castling without a rook on its home square");
            self.set_piece(rf, None);
            self.set_piece(rt, Some(rook));
            rook_move = Some((rf, rt));
        }

        // Rights go away when the king or a rook leaves home, or a rook is
        // captured at home.
        if moved.kind == PieceKind::King {
            match moved.color {
                Color::White => {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                Color::Black => {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
            }
        }
        if moved.kind == PieceKind::Rook {
            self.strip_rook_right(mv.from);
        }
        if let Some(cp) = captured
            && cp.kind == PieceKind::Rook
        {
            self.strip_rook_right(mv.to);
        }

        // Double pawn push opens the standard en-passant square.
        if moved.kind == PieceKind::Pawn && (rank_of(mv.to) - rank_of(mv.from)).abs() == 2 {
            let ep_rank = (rank_of(mv.from) + rank_of(mv.to)) / 2;
            self.en_passant = sq(file_of(mv.from), ep_rank);
        }

        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: prev_castling,
            en_passant: prev_ep,
            halfmove_clock: prev_hmc,
            fullmove_number: prev_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt).expect("castled rook missing on unmake");
            self.set_piece(rt, None);
            self.set_piece(rf, Some(rook));
        }

        // A promoted pawn goes back as a pawn.
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved_piece));

        if mv.class == MoveClass::EnPassant {
            if let Some(cs) = undo.ep_captured_sq {
                self.set_piece(cs, undo.captured);
            }
        } else {
            self.set_piece(mv.to, undo.captured);
        }
    }
}
