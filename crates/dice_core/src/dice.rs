//! The per-turn dice: three draws, each naming a piece kind the player may
//! move this turn.

use chess_core::PieceKind;
use rand::Rng;

pub const DICE_PER_TURN: usize = 3;

/// Multiset of unconsumed dice. Holds three after a roll and only shrinks
/// until the next roll; duplicates are meaningful (two Pawn dice allow two
/// pawn moves).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiceRoll {
    dice: Vec<PieceKind>,
}

impl DiceRoll {
    /// Three independent uniform draws over the six piece kinds.
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        let dice = (0..DICE_PER_TURN)
            .map(|_| PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())])
            .collect();
        Self { dice }
    }

    /// A fixed roll, for tests and scripted turns.
    pub fn from_kinds(kinds: &[PieceKind]) -> Self {
        assert!(
            kinds.len() <= DICE_PER_TURN,
            "at most {DICE_PER_TURN} dice per turn"
        );
        Self {
            dice: kinds.to_vec(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn contains(&self, kind: PieceKind) -> bool {
        self.dice.contains(&kind)
    }

    pub fn as_slice(&self) -> &[PieceKind] {
        &self.dice
    }

    /// Distinct kinds present, in first-seen order.
    pub fn kinds(&self) -> Vec<PieceKind> {
        let mut out = Vec::with_capacity(self.dice.len());
        for &k in &self.dice {
            if !out.contains(&k) {
                out.push(k);
            }
        }
        out
    }

    /// Remove one die of the given kind. False (and no change) when none
    /// of that kind is left.
    pub fn consume(&mut self, kind: PieceKind) -> bool {
        match self.dice.iter().position(|&k| k == kind) {
            Some(i) => {
                self.dice.remove(i);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "dice_tests.rs"]
mod dice_tests;
