//! Move and board text formats: UCI coordinate moves, SAN, and a plain
//! ASCII board for terminal play.

use crate::board::Position;
use crate::movegen::{RulesProfile, legal_moves, legal_moves_for};
use crate::types::*;

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.letter().to_ascii_lowercase());
    }
    s
}

/// Parse "e2e4" / "e7e8q" against the legal moves of the position, so the
/// returned move carries the right kind and class. A bare promotion square
/// defaults to the queen.
pub fn parse_uci_move(pos: &Position, txt: &str, profile: RulesProfile) -> Option<Move> {
    if txt.len() < 4 {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = if txt.len() >= 5 {
        match txt.as_bytes()[4].to_ascii_lowercase() as char {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => return None,
        }
    } else {
        None
    };

    legal_moves(pos, profile).into_iter().find(|m| {
        m.from == from
            && m.to == to
            && (m.promo == promo || (promo.is_none() && m.promo == Some(PieceKind::Queen)))
    })
}

/// Standard algebraic notation for a move in this position. No check or
/// mate suffixes: callers living in the checkless profile have no use for
/// them, and they carry no information for replaying a move.
pub fn san(pos: &Position, mv: Move, profile: RulesProfile) -> String {
    match mv.class {
        MoveClass::CastleKingside => return "O-O".to_string(),
        MoveClass::CastleQueenside => return "O-O-O".to_string(),
        _ => {}
    }

    let is_capture = matches!(mv.class, MoveClass::Capture | MoveClass::EnPassant);
    let mut s = String::new();

    if mv.kind == PieceKind::Pawn {
        if is_capture {
            s.push((b'a' + mv.from % 8) as char);
            s.push('x');
        }
        s.push_str(&sq_to_coord(mv.to));
        if let Some(p) = mv.promo {
            s.push('=');
            s.push(p.letter());
        }
    } else {
        s.push(mv.kind.letter());
        s.push_str(&disambiguation(pos, mv, profile));
        if is_capture {
            s.push('x');
        }
        s.push_str(&sq_to_coord(mv.to));
    }
    s
}

/// SAN departure hint when another piece of the same kind can also reach
/// the destination: file if that settles it, else rank, else both.
fn disambiguation(pos: &Position, mv: Move, profile: RulesProfile) -> String {
    let mut clash = false;
    let mut clash_file = false;
    let mut clash_rank = false;
    for (s, pc) in pos.pieces(pos.side_to_move) {
        if s == mv.from || pc.kind != mv.kind {
            continue;
        }
        if legal_moves_for(pos, s, profile).iter().any(|m| m.to == mv.to) {
            clash = true;
            if file_of(s) == file_of(mv.from) {
                clash_file = true;
            }
            if rank_of(s) == rank_of(mv.from) {
                clash_rank = true;
            }
        }
    }
    if !clash {
        return String::new();
    }
    let coord = sq_to_coord(mv.from);
    if !clash_file {
        coord[0..1].to_string()
    } else if !clash_rank {
        coord[1..2].to_string()
    } else {
        coord
    }
}

/// Eight ranks top-down, white pieces uppercase, '.' for empty squares.
pub fn board_ascii(pos: &Position) -> String {
    let mut s = String::new();
    for rank in (0..8).rev() {
        s.push((b'1' + rank as u8) as char);
        s.push(' ');
        for file in 0..8 {
            let ch = match pos.piece_at(sq(file, rank).unwrap()) {
                Some(pc) => match pc.color {
                    Color::White => pc.kind.letter(),
                    Color::Black => pc.kind.letter().to_ascii_lowercase(),
                },
                None => '.',
            };
            s.push(ch);
            s.push(' ');
        }
        s.push('\n');
    }
    s.push_str("  a b c d e f g h\n");
    s
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
