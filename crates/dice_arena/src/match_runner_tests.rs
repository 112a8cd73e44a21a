use super::*;

#[test]
fn test_self_play_completes() {
    let config = MatchConfig {
        num_games: 2,
        max_turns: 60,
        seed: Some(5),
        verbose: false,
    };
    let summary = MatchRunner::new(config).run_match();
    assert_eq!(summary.total_games(), 2);
    assert!(summary.turns_played > 0);
    assert!(summary.moves_played > 0);
}

#[test]
fn test_seeded_match_is_reproducible() {
    assert_eq!(quick_match(3, 1234), quick_match(3, 1234));
}

#[test]
fn test_moves_per_turn_stays_within_dice_bound() {
    let summary = quick_match(2, 7);
    assert!(summary.moves_per_turn() <= 3.0);
}
