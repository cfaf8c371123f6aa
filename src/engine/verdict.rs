use crate::N;
use crate::Position;
use crate::Round;
use crate::weapons::Weapon;

/// How a round came out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub round: Round,
    pub weapons: [Weapon; N],
    /// Seat that took the round; `None` on a tie.
    pub winner: Option<Position>,
    /// Flavor text for a decisive round.
    pub gore: Option<String>,
}

impl Verdict {
    pub fn tie(&self) -> bool {
        self.winner.is_none()
    }
}
