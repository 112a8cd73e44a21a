//! Dice-constrained move enumeration: what the rolled piece kinds allow
//! right now, including window captures and dual-dice castling.

use chess_core::{
    Color, Move, MoveClass, PieceKind, Position, RulesProfile, file_of, legal_moves_for, rank_of,
    sq,
};

use crate::state::TurnState;

/// Every move the active player may make with one remaining die. Castling
/// needs both a King and a Rook die. Pure in all of its inputs; returns
/// nothing when the dice are spent.
pub fn enumerate(pos: &Position, color: Color, state: &TurnState) -> Vec<Move> {
    debug_assert_eq!(pos.side_to_move, color);

    let mut out = Vec::new();
    if state.dice.is_empty() {
        return out;
    }

    let kinds = state.dice.kinds();
    let can_castle = state.dice.contains(PieceKind::King) && state.dice.contains(PieceKind::Rook);

    for (from, pc) in pos.pieces(color) {
        if !kinds.contains(&pc.kind) {
            continue;
        }
        for mv in legal_moves_for(pos, from, RulesProfile::CHECKLESS) {
            // The variant replaces standard en passant with the window
            // rules. The turn loop keeps the native square cleared; this
            // guard covers hand-built positions.
            if mv.class == MoveClass::EnPassant {
                continue;
            }
            if mv.class.is_castle() && !can_castle {
                continue;
            }
            out.push(mv);
        }
    }

    if state.dice.contains(PieceKind::Pawn) {
        window_captures(pos, color, state, &mut out);
    }

    out
}

/// Diagonal captures onto the window target, one per adjacent friendly pawn.
fn window_captures(pos: &Position, color: Color, state: &TurnState, out: &mut Vec<Move>) {
    let Some(w) = state.window else { return };
    if w.capturer != color || w.turns_left == 0 {
        return;
    }
    // The stepped pawn must still be in place and the target square empty;
    // otherwise the window is stale and offers nothing.
    let victim_ok = matches!(pos.piece_at(w.pawn_sq), Some(pc)
        if pc.color == color.other() && pc.kind == PieceKind::Pawn);
    if !victim_ok || pos.piece_at(w.target).is_some() {
        return;
    }

    let f = file_of(w.pawn_sq);
    let r = rank_of(w.pawn_sq);
    for df in [-1, 1] {
        if let Some(from) = sq(f + df, r) {
            let pawn_here = matches!(pos.piece_at(from), Some(pc)
                if pc.color == color && pc.kind == PieceKind::Pawn);
            if pawn_here {
                out.push(Move::new(from, w.target, PieceKind::Pawn, MoveClass::EnPassant));
            }
        }
    }
}

#[cfg(test)]
#[path = "enumerate_tests.rs"]
mod enumerate_tests;
