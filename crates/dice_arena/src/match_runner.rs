//! Match runner for self-play dice chess games

use std::fs;
use std::io;
use std::path::Path;

use dice_core::DiceGame;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::results::{GameOutcome, MatchSummary};

/// Configuration for a match
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Turn cap per game before it is scored unfinished
    pub max_turns: u32,
    /// Seed for dice and choosers; omitted means entropy
    pub seed: Option<u64>,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_turns: 400,
            seed: None,
            verbose: true,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Runs self-play matches with uniformly random choosers on both sides
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn run_match(&self) -> MatchSummary {
        let mut summary = MatchSummary::new();
        let mut seeder = match self.config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        for game_num in 0..self.config.num_games {
            let outcome = self.play_game(seeder.gen::<u64>(), &mut summary);
            summary.record(outcome);

            if self.config.verbose {
                let result = match outcome {
                    GameOutcome::WhiteWin => "1-0",
                    GameOutcome::BlackWin => "0-1",
                    GameOutcome::Unfinished => "cap",
                };
                println!(
                    "Game {}/{}: {} - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    result,
                    summary.white_wins,
                    summary.black_wins,
                    summary.unfinished
                );
            }
        }

        summary
    }

    /// Play a single game to king capture or the turn cap.
    fn play_game(&self, seed: u64, summary: &mut MatchSummary) -> GameOutcome {
        let mut game = DiceGame::with_seed(seed);
        let mut chooser = StdRng::seed_from_u64(seed.rotate_left(17));

        for _ in 0..self.config.max_turns {
            game.start_turn();
            summary.turns_played += 1;

            loop {
                let mv = match game.legal_moves_now().choose(&mut chooser) {
                    Some(&mv) => mv,
                    None => {
                        game.end_turn_if_forced();
                        break;
                    }
                };
                let out = game.choose_move(mv).expect("offered move must apply");
                summary.moves_played += 1;

                if let Some(winner) = out.game_result {
                    return match winner {
                        chess_core::Color::White => GameOutcome::WhiteWin,
                        chess_core::Color::Black => GameOutcome::BlackWin,
                    };
                }
                if !out.turn_continues {
                    break;
                }
            }

            game.next_turn();
        }

        GameOutcome::Unfinished
    }
}

/// Quick utility to run a small seeded match
pub fn quick_match(num_games: u32, seed: u64) -> MatchSummary {
    let config = MatchConfig {
        num_games,
        seed: Some(seed),
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match()
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
