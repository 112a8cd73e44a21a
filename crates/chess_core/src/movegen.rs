use crate::board::*;
use crate::types::*;

/// Capability profile for move legality. `STANDARD` is ordinary chess;
/// `CHECKLESS` turns the check rules off entirely: moves may leave or put
/// the own king in check, castling ignores attacked squares, and a king may
/// be captured like any other piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulesProfile {
    pub checks_enabled: bool,
}

impl RulesProfile {
    pub const STANDARD: RulesProfile = RulesProfile {
        checks_enabled: true,
    };
    pub const CHECKLESS: RulesProfile = RulesProfile {
        checks_enabled: false,
    };
}

/// Generate all legal moves for the side to move, returning a fresh vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position, profile: RulesProfile) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, profile, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, profile: RulesProfile, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, profile, out);
    if profile.checks_enabled {
        retain_check_legal(pos, out);
    }
}

/// Legal moves of the single piece on `from`. Empty when the square is
/// empty or holds a piece of the side not to move.
pub fn legal_moves_for(pos: &Position, from: u8, profile: RulesProfile) -> Vec<Move> {
    let pc = match pos.piece_at(from) {
        Some(p) if p.color == pos.side_to_move => p,
        _ => return Vec::new(),
    };
    let mut out = Vec::new();
    piece_moves(pos, from, pc, profile, &mut out);
    if profile.checks_enabled {
        let mut tmp = pos.clone();
        retain_check_legal(&mut tmp, &mut out);
    }
    out
}

/// Filter moves that leave the mover's king in check, in place, by playing
/// them on the mutable position.
fn retain_check_legal(pos: &mut Position, out: &mut Vec<Move>) {
    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

fn pseudo_moves(pos: &Position, profile: RulesProfile, out: &mut Vec<Move>) {
    for (from, pc) in pos.pieces(pos.side_to_move) {
        piece_moves(pos, from, pc, profile, out);
    }
}

fn piece_moves(pos: &Position, from: u8, pc: Piece, profile: RulesProfile, out: &mut Vec<Move>) {
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
        PieceKind::Knight => gen_leaper(pos, from, pc.color, PieceKind::Knight, &KNIGHT_DELTAS, out),
        PieceKind::Bishop => gen_slider(pos, from, pc.color, PieceKind::Bishop, &DIAG_DIRS, out),
        PieceKind::Rook => gen_slider(pos, from, pc.color, PieceKind::Rook, &ORTHO_DIRS, out),
        PieceKind::Queen => {
            gen_slider(pos, from, pc.color, PieceKind::Queen, &DIAG_DIRS, out);
            gen_slider(pos, from, pc.color, PieceKind::Queen, &ORTHO_DIRS, out);
        }
        PieceKind::King => {
            gen_leaper(pos, from, pc.color, PieceKind::King, &KING_DELTAS, out);
            gen_castle(pos, from, pc.color, profile, out);
        }
    }
}

fn push_capture_or_quiet(pos: &Position, from: u8, to: u8, kind: PieceKind, out: &mut Vec<Move>) {
    let class = if pos.piece_at(to).is_some() {
        MoveClass::Capture
    } else {
        MoveClass::Normal
    };
    out.push(Move::new(from, to, kind, class));
}

fn push_pawn_move(from: u8, to: u8, c: Color, class: MoveClass, out: &mut Vec<Move>) {
    if rank_of(to) == promo_rank(c) {
        // One distinct move per promotion choice.
        for pk in [
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
        ] {
            out.push(Move::new(from, to, PieceKind::Pawn, class).with_promo(pk));
        }
    } else {
        out.push(Move::new(from, to, PieceKind::Pawn, class));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let dir = pawn_dir(c);
    let start_rank = back_rank(c) + dir;

    // forward 1, forward 2 from start
    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(from, to, c, MoveClass::Normal, out);

        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2, PieceKind::Pawn, MoveClass::Normal));
        }
    }

    // diagonal captures, plus the standard en-passant square if open
    for df in [-1, 1] {
        if let Some(to) = sq(f + df, r + dir) {
            if let Some(tpc) = pos.piece_at(to) {
                if tpc.color != c {
                    push_pawn_move(from, to, c, MoveClass::Capture, out);
                }
            } else if pos.en_passant == Some(to) {
                out.push(Move::new(from, to, PieceKind::Pawn, MoveClass::EnPassant));
            }
        }
    }
}

fn gen_leaper(
    pos: &Position,
    from: u8,
    c: Color,
    kind: PieceKind,
    deltas: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let f = file_of(from);
    let r = rank_of(from);
    for &(df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => push_capture_or_quiet(pos, from, to, kind, out),
            }
        }
    }
}

fn gen_slider(
    pos: &Position,
    from: u8,
    c: Color,
    kind: PieceKind,
    dirs: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for &(df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to, kind, MoveClass::Normal)),
                Some(pc) => {
                    if pc.color != c {
                        out.push(Move::new(from, to, kind, MoveClass::Capture));
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, profile: RulesProfile, out: &mut Vec<Move>) {
    if from != king_home(c) {
        return;
    }
    if profile.checks_enabled && pos.in_check(c) {
        return;
    }

    for (side, class) in [
        (CastleSide::Kingside, MoveClass::CastleKingside),
        (CastleSide::Queenside, MoveClass::CastleQueenside),
    ] {
        if !pos.castle_rights(c, side) || !pos.castle_path_clear(c, side) {
            continue;
        }
        if profile.checks_enabled && !castle_path_safe(pos, c, side) {
            continue;
        }
        out.push(Move::new(
            from,
            king_castle_to(c, side),
            PieceKind::King,
            class,
        ));
    }
}

/// The squares the king crosses must not be attacked. Only consulted under
/// the standard profile.
fn castle_path_safe(pos: &Position, c: Color, side: CastleSide) -> bool {
    let rank = back_rank(c);
    let files: [i8; 2] = match side {
        CastleSide::Kingside => [5, 6],
        CastleSide::Queenside => [3, 2],
    };
    let enemy = c.other();
    files
        .iter()
        .all(|&f| !pos.is_square_attacked(sq(f, rank).unwrap(), enemy))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
