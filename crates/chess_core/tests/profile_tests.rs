//! Tests for the rules-profile seam between standard chess and checkless
//! variants: what becomes legal when the check rules are switched off.

use chess_core::{
    MoveClass, PieceKind, Position, RulesProfile, coord_to_sq, legal_moves, legal_moves_for,
};

#[test]
fn test_checkless_castle_through_attacked_square() {
    // Rook f3 covers f1, the square the king crosses.
    let pos = Position::from_fen("4k3/8/8/8/8/5r2/8/4K2R w K - 0 1");

    let standard = legal_moves(&pos, RulesProfile::STANDARD);
    assert!(standard.iter().all(|m| !m.class.is_castle()));

    let checkless = legal_moves(&pos, RulesProfile::CHECKLESS);
    assert!(
        checkless
            .iter()
            .any(|m| m.class == MoveClass::CastleKingside)
    );
}

#[test]
fn test_checkless_castle_while_in_check() {
    // Rook e3 gives check down the e-file; checkless castling does not care.
    let pos = Position::from_fen("4k3/8/8/8/8/4r3/8/4K2R w K - 0 1");
    assert!(pos.in_check(chess_core::Color::White));

    let standard = legal_moves(&pos, RulesProfile::STANDARD);
    assert!(standard.iter().all(|m| !m.class.is_castle()));

    let checkless = legal_moves(&pos, RulesProfile::CHECKLESS);
    assert!(
        checkless
            .iter()
            .any(|m| m.class == MoveClass::CastleKingside)
    );
}

#[test]
fn test_checkless_king_can_be_captured() {
    // Queen e7 stares at the bare king on e8.
    let pos = Position::from_fen("4k3/4Q3/8/8/8/8/8/4K3 w - - 0 1");
    let e7 = coord_to_sq("e7").unwrap();
    let moves = legal_moves_for(&pos, e7, RulesProfile::CHECKLESS);
    let king_capture = moves
        .iter()
        .find(|m| m.to == coord_to_sq("e8").unwrap())
        .expect("queen should be able to take the king");
    assert_eq!(king_capture.class, MoveClass::Capture);
}

#[test]
fn test_checkless_ignores_absent_king() {
    // Boards without a king must stay usable: the turn loop keeps playing
    // out positions after a king capture during lookahead.
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R7 w - - 0 1");
    let a1 = coord_to_sq("a1").unwrap();
    let moves = legal_moves_for(&pos, a1, RulesProfile::CHECKLESS);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.kind == PieceKind::Rook));
}
