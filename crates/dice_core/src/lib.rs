//! Dice chess turn engine.
//!
//! Each turn a player rolls three dice, every die naming a piece kind, and
//! plays up to three moves, one die per move. The player is obliged to play
//! a sequence that consumes as many dice as the roll and position allow:
//! moves that would strictly shorten the turn are withheld. Castling needs
//! a King die and a Rook die together and consumes both. Check, checkmate
//! and stalemate do not exist; the game ends when a king is captured. A
//! double pawn step opens an en-passant window the opponent may use during
//! their next turn only.
//!
//! Standard piece movement comes from the `chess_core` crate under its
//! `CHECKLESS` rules profile; this crate owns the dice, the window, the
//! maximization search and the turn state machine.

pub mod dice;
pub mod enumerate;
pub mod error;
pub mod game;
pub mod maximize;
pub mod state;

pub use dice::*;
pub use enumerate::enumerate;
pub use error::DiceError;
pub use game::*;
pub use maximize::*;
pub use state::*;
