//! Match results storage and reporting

use serde::Serialize;

/// Result of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    WhiteWin,
    BlackWin,
    /// Turn cap reached with both kings still standing
    Unfinished,
}

/// Aggregate over a match of self-play games
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchSummary {
    pub white_wins: u32,
    pub black_wins: u32,
    pub unfinished: u32,
    pub turns_played: u64,
    pub moves_played: u64,
}

impl MatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::WhiteWin => self.white_wins += 1,
            GameOutcome::BlackWin => self.black_wins += 1,
            GameOutcome::Unfinished => self.unfinished += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.white_wins + self.black_wins + self.unfinished
    }

    /// Average moves actually played per turn; the variant allows up to
    /// three but forced passes and short rolls pull it down.
    pub fn moves_per_turn(&self) -> f64 {
        if self.turns_played == 0 {
            return 0.0;
        }
        self.moves_played as f64 / self.turns_played as f64
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("summary serializes")
    }

    pub fn print_report(&self) {
        println!("Games:       {}", self.total_games());
        println!(
            "Score:       {} white / {} black / {} unfinished",
            self.white_wins, self.black_wins, self.unfinished
        );
        println!("Turns:       {}", self.turns_played);
        println!("Moves/turn:  {:.2}", self.moves_per_turn());
    }
}
