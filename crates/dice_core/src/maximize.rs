//! The forced-maximization rule: a move may be played only if some
//! continuation through it consumes as many dice as any sequence from the
//! current state can.

use chess_core::{Color, Move, PieceKind, Position};

use crate::enumerate::enumerate;
use crate::state::TurnState;

/// Dice a move consumes: castling burns the King and the Rook die at once.
pub fn die_cost(mv: Move) -> u32 {
    if mv.class.is_castle() { 2 } else { 1 }
}

pub fn captures_king(pos: &Position, mv: Move) -> bool {
    matches!(pos.piece_at(mv.to), Some(pc) if pc.kind == PieceKind::King)
}

/// The filtered legal set plus the turn maximum it was measured against.
#[derive(Clone, Debug)]
pub struct FilteredMoves {
    pub moves: Vec<Move>,
    pub turn_max: u32,
}

/// Most dice any move sequence can consume from this state. Recursion depth
/// is bounded by the dice left, never more than three.
pub fn best_total(pos: &Position, color: Color, state: &TurnState) -> u32 {
    let cap = state.dice.len() as u32;
    if cap == 0 {
        return 0;
    }
    let mut best = 0;
    for mv in enumerate(pos, color, state) {
        let total = total_through(pos, color, state, mv);
        if total > best {
            best = total;
            if best == cap {
                break; // nothing beats consuming every die
            }
        }
    }
    best
}

/// Dice consumed by playing `mv` and then continuing as well as possible.
fn total_through(pos: &Position, color: Color, state: &TurnState, mv: Move) -> u32 {
    let mut scratch_pos = pos.clone();
    let mut scratch = state.clone();
    scratch.apply(&mut scratch_pos, mv, color);
    die_cost(mv) + best_total(&scratch_pos, color, &scratch)
}

/// Keep the candidates whose best continuation reaches the turn maximum.
/// A move that takes the king is kept regardless: it ends the game and is
/// never maximization-blocked. Empty candidates yield a turn maximum of
/// zero: the turn must end even though dice remain.
pub fn filter_to_maximal(
    pos: &Position,
    color: Color,
    state: &TurnState,
    candidates: Vec<Move>,
) -> FilteredMoves {
    let mut valued: Vec<(Move, u32)> = Vec::with_capacity(candidates.len());
    let mut turn_max = 0;
    for mv in candidates {
        let total = total_through(pos, color, state, mv);
        turn_max = turn_max.max(total);
        valued.push((mv, total));
    }
    let moves = valued
        .into_iter()
        .filter(|&(mv, total)| total == turn_max || captures_king(pos, mv))
        .map(|(mv, _)| mv)
        .collect();
    FilteredMoves { moves, turn_max }
}

#[cfg(test)]
#[path = "maximize_tests.rs"]
mod maximize_tests;
