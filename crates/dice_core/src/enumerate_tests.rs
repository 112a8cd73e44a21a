use super::*;
use crate::dice::DiceRoll;
use crate::state::EnPassantWindow;
use chess_core::coord_to_sq;

fn state_with_dice(kinds: &[PieceKind]) -> TurnState {
    TurnState {
        dice: DiceRoll::from_kinds(kinds),
        window: None,
    }
}

#[test]
fn test_only_rolled_kinds_move() {
    let pos = Position::startpos();
    let moves = enumerate(&pos, Color::White, &state_with_dice(&[PieceKind::Knight]));
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.kind == PieceKind::Knight));
}

#[test]
fn test_duplicate_dice_do_not_duplicate_moves() {
    let pos = Position::startpos();
    let once = enumerate(&pos, Color::White, &state_with_dice(&[PieceKind::Pawn]));
    let twice = enumerate(
        &pos,
        Color::White,
        &state_with_dice(&[PieceKind::Pawn, PieceKind::Pawn]),
    );
    assert_eq!(once.len(), 16);
    assert_eq!(twice.len(), 16);
}

#[test]
fn test_empty_dice_enumerate_nothing() {
    let pos = Position::startpos();
    assert!(enumerate(&pos, Color::White, &state_with_dice(&[])).is_empty());
}

#[test]
fn test_enumeration_is_idempotent() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let state = state_with_dice(&[PieceKind::King, PieceKind::Rook, PieceKind::Queen]);
    assert_eq!(
        enumerate(&pos, Color::White, &state),
        enumerate(&pos, Color::White, &state)
    );
}

#[test]
fn test_castle_needs_both_dice() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

    let king_only = enumerate(&pos, Color::White, &state_with_dice(&[PieceKind::King]));
    assert!(!king_only.is_empty());
    assert!(king_only.iter().all(|m| !m.class.is_castle()));

    let rook_only = enumerate(&pos, Color::White, &state_with_dice(&[PieceKind::Rook]));
    assert!(rook_only.iter().all(|m| !m.class.is_castle()));

    let both = enumerate(
        &pos,
        Color::White,
        &state_with_dice(&[PieceKind::King, PieceKind::Rook]),
    );
    assert_eq!(both.iter().filter(|m| m.class.is_castle()).count(), 2);
}

#[test]
fn test_window_capture_needs_a_pawn_die() {
    // Black pawn d4 sits beside the white pawn that double-stepped to e4.
    let pos = Position::from_fen("4k3/8/8/8/3pP3/8/8/4K3 b - - 0 1");
    let window = Some(EnPassantWindow {
        target: coord_to_sq("e3").unwrap(),
        pawn_sq: coord_to_sq("e4").unwrap(),
        capturer: Color::Black,
        turns_left: 1,
    });

    let mut state = state_with_dice(&[PieceKind::Pawn]);
    state.window = window;
    let moves = enumerate(&pos, Color::Black, &state);
    let ep: Vec<&Move> = moves
        .iter()
        .filter(|m| m.class == MoveClass::EnPassant)
        .collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].from, coord_to_sq("d4").unwrap());
    assert_eq!(ep[0].to, coord_to_sq("e3").unwrap());

    let mut no_pawn_die = state_with_dice(&[PieceKind::Knight]);
    no_pawn_die.window = window;
    let moves = enumerate(&pos, Color::Black, &no_pawn_die);
    assert!(moves.iter().all(|m| m.class != MoveClass::EnPassant));
}

#[test]
fn test_window_belongs_to_one_side_only() {
    // Same board, white to move: the window is black's and offers white
    // nothing.
    let pos = Position::from_fen("4k3/8/8/8/3pP3/8/8/4K3 w - - 0 1");
    let mut state = state_with_dice(&[PieceKind::Pawn]);
    state.window = Some(EnPassantWindow {
        target: coord_to_sq("e3").unwrap(),
        pawn_sq: coord_to_sq("e4").unwrap(),
        capturer: Color::Black,
        turns_left: 1,
    });
    let moves = enumerate(&pos, Color::White, &state);
    assert!(moves.iter().all(|m| m.class != MoveClass::EnPassant));
}

#[test]
fn test_two_adjacent_pawns_get_two_window_captures() {
    // Black pawns on c4 and e4 flank the white pawn that stepped to d4.
    let pos = Position::from_fen("4k3/8/8/8/2pPp3/8/8/4K3 b - - 0 1");
    let mut state = state_with_dice(&[PieceKind::Pawn]);
    state.window = Some(EnPassantWindow {
        target: coord_to_sq("d3").unwrap(),
        pawn_sq: coord_to_sq("d4").unwrap(),
        capturer: Color::Black,
        turns_left: 1,
    });
    let moves = enumerate(&pos, Color::Black, &state);
    let ep_count = moves
        .iter()
        .filter(|m| m.class == MoveClass::EnPassant)
        .count();
    assert_eq!(ep_count, 2);
}

#[test]
fn test_stale_window_offers_nothing() {
    // The double-stepped pawn is no longer on its square.
    let pos = Position::from_fen("4k3/8/8/8/3p4/8/8/4K3 b - - 0 1");
    let mut state = state_with_dice(&[PieceKind::Pawn]);
    state.window = Some(EnPassantWindow {
        target: coord_to_sq("e3").unwrap(),
        pawn_sq: coord_to_sq("e4").unwrap(),
        capturer: Color::Black,
        turns_left: 1,
    });
    let moves = enumerate(&pos, Color::Black, &state);
    assert!(moves.iter().all(|m| m.class != MoveClass::EnPassant));
}

#[test]
fn test_native_en_passant_square_is_ignored() {
    // A hand-built position with the standard ep square set: the variant
    // only honors its own window.
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let moves = enumerate(&pos, Color::White, &state_with_dice(&[PieceKind::Pawn]));
    assert!(moves.iter().all(|m| m.class != MoveClass::EnPassant));
}
