use super::*;

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    // Starting position has 20 legal moves, under either profile.
    assert_eq!(legal_moves(&pos, RulesProfile::STANDARD).len(), 20);
    assert_eq!(legal_moves(&pos, RulesProfile::CHECKLESS).len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let moves = legal_moves(&pos, RulesProfile::STANDARD);
    assert_eq!(moves.len(), 48);
}

#[test]
fn test_pinned_knight_depends_on_profile() {
    // Knight e2 shields the king from the rook on e3.
    let pos = Position::from_fen("4k3/8/8/8/8/4r3/4N3/4K3 w - - 0 1");
    let e2 = coord_to_sq("e2").unwrap();
    assert!(legal_moves_for(&pos, e2, RulesProfile::STANDARD).is_empty());
    assert_eq!(legal_moves_for(&pos, e2, RulesProfile::CHECKLESS).len(), 6);
}

#[test]
fn test_king_may_enter_attacked_square_when_checkless() {
    // Rook a2 covers the whole second rank.
    let pos = Position::from_fen("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
    let e1 = coord_to_sq("e1").unwrap();
    assert_eq!(legal_moves_for(&pos, e1, RulesProfile::STANDARD).len(), 2);
    assert_eq!(legal_moves_for(&pos, e1, RulesProfile::CHECKLESS).len(), 5);
}

#[test]
fn test_both_castles_generated() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let castles: Vec<Move> = legal_moves(&pos, RulesProfile::STANDARD)
        .into_iter()
        .filter(|m| m.class.is_castle())
        .collect();
    assert_eq!(castles.len(), 2);
    assert!(castles.iter().any(|m| m.class == MoveClass::CastleKingside));
    assert!(castles.iter().any(|m| m.class == MoveClass::CastleQueenside));
}

#[test]
fn test_castle_blocked_path_not_generated() {
    // Bishop f1 blocks the kingside path.
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4KB1R w K - 0 1");
    assert!(
        legal_moves(&pos, RulesProfile::CHECKLESS)
            .iter()
            .all(|m| !m.class.is_castle())
    );
}

#[test]
fn test_promotion_is_four_distinct_moves() {
    let pos = Position::from_fen("8/P7/8/8/8/8/8/K6k w - - 0 1");
    let a7 = coord_to_sq("a7").unwrap();
    let moves = legal_moves_for(&pos, a7, RulesProfile::STANDARD);
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.promo.is_some()));
}

#[test]
fn test_standard_en_passant_generated_from_fen_square() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let moves = legal_moves(&pos, RulesProfile::STANDARD);
    let ep: Vec<&Move> = moves
        .iter()
        .filter(|m| m.class == MoveClass::EnPassant)
        .collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].to, coord_to_sq("d6").unwrap());
}

#[test]
fn test_legal_moves_for_wrong_color_is_empty() {
    let pos = Position::startpos();
    let e7 = coord_to_sq("e7").unwrap();
    assert!(legal_moves_for(&pos, e7, RulesProfile::STANDARD).is_empty());
}

#[test]
fn test_make_unmake_round_trip() {
    let mut pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let before = pos.clone();
    for mv in legal_moves(&pos, RulesProfile::STANDARD) {
        let undo = pos.make_move(mv);
        pos.unmake_move(mv, undo);
        assert_eq!(pos.board, before.board, "board differs after {:?}", mv);
        assert_eq!(pos.castling, before.castling);
        assert_eq!(pos.en_passant, before.en_passant);
    }
}
