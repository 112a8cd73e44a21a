//! Standard chess rules as a service: board state, move generation, FEN
//! setup and notation. Legality is parameterized by a [`RulesProfile`] so a
//! variant that abolishes check (see the `dice_core` crate) can consume the
//! same generator with the check rules switched off instead of overriding
//! behavior.

pub mod board;
mod fen;
pub mod movegen;
pub mod notation;
pub mod types;

pub use board::*;
pub use movegen::*;
pub use notation::*;
pub use types::*;
