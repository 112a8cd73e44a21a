//! One full turn, from roll to handoff: the game controller that owns the
//! board, the dice and the en-passant window, and enforces the variant's
//! rules between the chooser and the chess backend.

use chess_core::{Color, Move, PieceKind, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dice::DiceRoll;
use crate::enumerate::enumerate;
use crate::error::DiceError;
use crate::maximize::filter_to_maximal;
use crate::state::{EnPassantWindow, TurnState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingRoll,
    DiceActive,
    TurnEnded,
}

/// What a chosen move did to the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub turn_continues: bool,
    pub game_result: Option<Color>,
}

pub struct DiceGame {
    pos: Position,
    active: Color,
    state: TurnState,
    phase: TurnPhase,
    legal: Vec<Move>,
    turn_max: u32,
    moves_played: u32,
    result: Option<Color>,
    rng: StdRng,
}

impl DiceGame {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// Deterministic dice for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        let mut game = Self::new();
        game.rng = StdRng::seed_from_u64(seed);
        game
    }

    /// Start from an arbitrary position; the side to move rolls first.
    pub fn from_position(mut pos: Position) -> Self {
        // The variant's window replaces the board's native ep square.
        pos.en_passant = None;
        let active = pos.side_to_move;
        Self {
            pos,
            active,
            state: TurnState::new(),
            phase: TurnPhase::AwaitingRoll,
            legal: Vec::new(),
            turn_max: 0,
            moves_played: 0,
            result: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Roll three dice and open the turn.
    ///
    /// Calling this outside `AwaitingRoll`, or after the game is decided,
    /// is a contract violation and panics.
    pub fn start_turn(&mut self) -> &DiceRoll {
        let roll = DiceRoll::roll(&mut self.rng);
        self.start_turn_with(roll)
    }

    /// Open the turn with a fixed roll (tests, scripted games).
    pub fn start_turn_with(&mut self, roll: DiceRoll) -> &DiceRoll {
        assert_eq!(
            self.phase,
            TurnPhase::AwaitingRoll,
            "start_turn while a turn is under way"
        );
        assert!(self.result.is_none(), "start_turn after the game is over");
        self.state.dice = roll;
        self.moves_played = 0;
        self.phase = TurnPhase::DiceActive;
        self.refresh_legal();
        &self.state.dice
    }

    fn refresh_legal(&mut self) {
        let candidates = enumerate(&self.pos, self.active, &self.state);
        let filtered = filter_to_maximal(&self.pos, self.active, &self.state, candidates);
        self.legal = filtered.moves;
        self.turn_max = filtered.turn_max;
    }

    /// The maximization-filtered legal set for the current dice.
    pub fn legal_moves_now(&self) -> &[Move] {
        &self.legal
    }

    /// Play one of the offered moves. Rejections leave every piece of
    /// state exactly as it was.
    pub fn choose_move(&mut self, mv: Move) -> Result<MoveOutcome, DiceError> {
        if self.phase != TurnPhase::DiceActive {
            return Err(DiceError::NoDiceRemaining);
        }
        if !self.legal.contains(&mv) {
            return Err(if mv.class.is_castle() {
                DiceError::IllegalCastleRequest
            } else {
                DiceError::InvalidMoveSelection
            });
        }

        let captured = self.state.apply(&mut self.pos, mv, self.active);
        self.moves_played += 1;

        if matches!(captured, Some(pc) if pc.kind == PieceKind::King) {
            // King capture ends the game on the spot, dice or no dice.
            self.result = Some(self.active);
            self.phase = TurnPhase::TurnEnded;
            self.legal.clear();
        } else if self.state.dice.is_empty() {
            self.phase = TurnPhase::TurnEnded;
            self.legal.clear();
        } else {
            self.refresh_legal();
            if self.legal.is_empty() {
                // The dice that remain name pieces with no moves left.
                self.phase = TurnPhase::TurnEnded;
            }
        }

        Ok(MoveOutcome {
            turn_continues: self.phase == TurnPhase::DiceActive,
            game_result: self.result,
        })
    }

    /// End the turn because no filtered move exists while dice remain.
    /// True when the transition happened; no die is consumed by a pass.
    pub fn end_turn_if_forced(&mut self) -> bool {
        if self.phase == TurnPhase::DiceActive && self.legal.is_empty() {
            self.phase = TurnPhase::TurnEnded;
            true
        } else {
            false
        }
    }

    /// Hand the board to the opponent. Ticks the en-passant window of the
    /// player whose turn just ended and clears the per-turn counters.
    pub fn next_turn(&mut self) {
        assert_eq!(self.phase, TurnPhase::TurnEnded, "turn still in progress");
        self.state.dice = DiceRoll::empty();
        self.state.end_turn(self.active);
        self.active = self.active.other();
        self.pos.side_to_move = self.active;
        self.moves_played = 0;
        self.turn_max = 0;
        self.legal.clear();
        self.phase = TurnPhase::AwaitingRoll;
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }
    pub fn active_color(&self) -> Color {
        self.active
    }
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }
    pub fn dice(&self) -> &DiceRoll {
        &self.state.dice
    }
    pub fn window(&self) -> Option<&EnPassantWindow> {
        self.state.window.as_ref()
    }
    pub fn game_result(&self) -> Option<Color> {
        self.result
    }
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }
    pub fn turn_max(&self) -> u32 {
        self.turn_max
    }
}

impl Default for DiceGame {
    fn default() -> Self {
        Self::new()
    }
}
