use super::*;
use crate::Error;
use crate::N;
use crate::Position;
use crate::Round;
use crate::WIN_THRESHOLD;
use crate::players::Recall;
use crate::players::Seat;
use crate::weapons::Weapon;
use crate::weapons::gore;

/// Match state shared by both sides: the round counter and the two seats.
///
/// Pure bookkeeping with no I/O, so rounds can be resolved from fixed weapons.
#[derive(Debug, Clone)]
pub struct Table {
    round: Round,
    seats: [Seat; N],
}

impl Table {
    pub fn new(seats: [Seat; N]) -> Self {
        Self { round: 1, seats }
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn seats(&self) -> &[Seat; N] {
        &self.seats
    }
    pub fn seat(&self, pos: Position) -> &Seat {
        &self.seats[pos]
    }
    /// History as seen from `pos`.
    pub fn recall(&self, pos: Position) -> Recall<'_> {
        Recall {
            round: self.round,
            own: self.seats[pos].ledger(),
            opponent: self.seats[Self::opponent(pos)].ledger(),
        }
    }
    /// Commit `pos`'s move for the current round.
    pub fn commit(&mut self, pos: Position, weapon: Weapon) -> Result<(), Error> {
        self.seats[pos].play(self.round, weapon)
    }
    /// Settle the current round once both moves are committed.
    ///
    /// Equal weapons tie and leave scores and ledgers alone. Otherwise the
    /// owner of the beating weapon scores and has its entry marked won.
    pub fn resolve(&mut self) -> Result<Verdict, Error> {
        let round = self.round;
        let weapons = [self.committed(0)?, self.committed(1)?];
        let winner = match weapons {
            [a, b] if a == b => None,
            [a, b] if a.beats(b) => Some(0),
            _ => Some(1),
        };
        let text = match winner {
            None => None,
            Some(pos) => Some(gore(weapons[pos], weapons[Self::opponent(pos)])?),
        };
        if let Some(pos) = winner {
            self.seats[pos].win(round)?;
        }
        Ok(Verdict {
            round,
            weapons,
            winner,
            gore: text,
        })
    }
    pub fn advance(&mut self) {
        self.round += 1;
    }
    /// Whether someone has reached the win threshold.
    pub fn complete(&self) -> bool {
        self.seats.iter().any(|s| s.score() >= WIN_THRESHOLD)
    }
    /// The leading seat, if scores differ.
    pub fn leader(&self) -> Option<Position> {
        match self.seats[0].score().cmp(&self.seats[1].score()) {
            std::cmp::Ordering::Greater => Some(0),
            std::cmp::Ordering::Less => Some(1),
            std::cmp::Ordering::Equal => None,
        }
    }
    /// Back to round 1 with zero scores and empty ledgers, names kept.
    pub fn reset(&mut self) {
        self.round = 1;
        self.seats.iter_mut().for_each(Seat::reset);
    }
    fn committed(&self, pos: Position) -> Result<Weapon, Error> {
        self.seats[pos]
            .ledger()
            .get(self.round)
            .map(|r| r.weapon())
            .ok_or(Error::Missing(self.round))
    }
    fn opponent(pos: Position) -> Position {
        (pos + 1) % N
    }
}
