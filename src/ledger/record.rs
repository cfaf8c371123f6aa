use crate::Round;
use crate::weapons::Weapon;

/// A single committed move.
///
/// Created unresolved when a player commits; `won` flips at most once, when
/// the round resolves in this move's favour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    round: Round,
    weapon: Weapon,
    won: bool,
}

impl Record {
    pub fn new(round: Round, weapon: Weapon) -> Self {
        Self {
            round,
            weapon,
            won: false,
        }
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn weapon(&self) -> Weapon {
        self.weapon
    }
    pub fn won(&self) -> bool {
        self.won
    }
    pub(super) fn win(&mut self) {
        self.won = true;
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.won {
            true => write!(f, "{:>3}. {} (won)", self.round, self.weapon),
            false => write!(f, "{:>3}. {}", self.round, self.weapon),
        }
    }
}
