use thiserror::Error;

/// Errors surfaced to the move chooser. Selection errors leave the game
/// untouched; the caller re-prompts and tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiceError {
    /// The move is not in the current maximization-filtered legal set.
    #[error("move is not in the current legal set")]
    InvalidMoveSelection,
    /// No turn is active, or every die has been consumed.
    #[error("no dice remain to move with")]
    NoDiceRemaining,
    /// A castle was requested without both required dice or board legality.
    #[error("castling needs a king die, a rook die, rights and a clear path")]
    IllegalCastleRequest,
}
