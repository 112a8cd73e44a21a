//! Turn-scoped state: the dice multiset and the variant's en-passant
//! window, carried as a plain value so the maximization search can fork
//! scratch copies without touching the live game.

use chess_core::{Color, Move, MoveClass, Piece, PieceKind, Position, file_of, rank_of, sq};

use crate::dice::DiceRoll;

/// Capture chance left behind by a double pawn step. Belongs to the
/// opponent of the pawn that stepped and survives until that player's next
/// full turn ends without using it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnPassantWindow {
    /// Square the capturing pawn lands on (the one the stepped pawn skipped).
    pub target: u8,
    /// Square of the double-stepped pawn.
    pub pawn_sq: u8,
    /// The only side allowed to use the window.
    pub capturer: Color,
    /// Full turns of the capturer left before the window lapses.
    pub turns_left: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnState {
    pub dice: DiceRoll,
    pub window: Option<EnPassantWindow>,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `mv` is the capture offered by the active window.
    pub fn is_window_capture(&self, mover: Color, mv: Move) -> bool {
        matches!(self.window, Some(w)
            if w.capturer == mover && mv.class == MoveClass::EnPassant && mv.to == w.target)
    }

    /// Apply one dice move to `pos` and this state: the single application
    /// path shared by live play and the maximization search. Returns the
    /// captured piece, if any.
    pub fn apply(&mut self, pos: &mut Position, mv: Move, mover: Color) -> Option<Piece> {
        debug_assert_eq!(pos.side_to_move, mover);

        if self.is_window_capture(mover, mv) {
            self.window = None;
        }

        let undo = pos.make_move(mv);

        // The mover keeps the turn until the dice run out, and the board's
        // native en-passant square stays unused: the window replaces it.
        pos.side_to_move = mover;
        pos.en_passant = None;

        self.dice.consume(mv.kind);
        if mv.class.is_castle() {
            self.dice.consume(PieceKind::Rook);
        }

        // A double step opens a window for the opponent, replacing any
        // older one: at most one window is ever active.
        if mv.kind == PieceKind::Pawn && (rank_of(mv.to) - rank_of(mv.from)).abs() == 2 {
            let skipped = (rank_of(mv.from) + rank_of(mv.to)) / 2;
            self.window = Some(EnPassantWindow {
                target: sq(file_of(mv.from), skipped).unwrap(),
                pawn_sq: mv.to,
                capturer: mover.other(),
                turns_left: 1,
            });
        }

        undo.captured
    }

    /// Turn handoff: the window of the player whose turn just ended loses
    /// its last life.
    pub fn end_turn(&mut self, finished: Color) {
        if let Some(w) = &mut self.window {
            if w.capturer == finished {
                w.turns_left = w.turns_left.saturating_sub(1);
                if w.turns_left == 0 {
                    self.window = None;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
