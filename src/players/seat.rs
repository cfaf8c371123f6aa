use crate::Error;
use crate::Round;
use crate::Score;
use crate::ledger::Ledger;
use crate::weapons::Weapon;
use colored::*;

/// Everything the table knows about one side.
///
/// The name outlives rematches; score, current weapon and ledger do not.
#[derive(Debug, Clone)]
pub struct Seat {
    name: String,
    score: Score,
    weapon: Option<Weapon>,
    ledger: Ledger,
}

impl Seat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            weapon: None,
            ledger: Ledger::default(),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn score(&self) -> Score {
        self.score
    }
    /// Weapon committed for the active round.
    pub fn weapon(&self) -> Option<Weapon> {
        self.weapon
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    /// Commit a move for `round`.
    pub fn play(&mut self, round: Round, weapon: Weapon) -> Result<(), Error> {
        self.ledger.record(round, weapon)?;
        self.weapon = Some(weapon);
        Ok(())
    }
    /// Credit this seat with `round`.
    pub fn win(&mut self, round: Round) -> Result<(), Error> {
        self.ledger.mark_won(round)?;
        self.score += 1;
        Ok(())
    }
    /// Fresh match, same name.
    pub fn reset(&mut self) {
        self.score = 0;
        self.weapon = None;
        self.ledger = Ledger::default();
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.name.bold(), self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_commits_to_ledger() {
        let mut seat = Seat::new("Ada");
        seat.play(1, Weapon::Spock).unwrap();
        assert_eq!(seat.weapon(), Some(Weapon::Spock));
        assert_eq!(seat.ledger().len(), 1);
        assert!(matches!(seat.play(1, Weapon::Rock), Err(Error::Duplicate(1))));
    }

    #[test]
    fn win_scores_and_marks() {
        let mut seat = Seat::new("Ada");
        seat.play(1, Weapon::Rock).unwrap();
        seat.win(1).unwrap();
        assert_eq!(seat.score(), 1);
        assert!(seat.ledger().get(1).unwrap().won());
    }

    #[test]
    fn win_without_a_move_scores_nothing() {
        let mut seat = Seat::new("Ada");
        assert!(seat.win(1).is_err());
        assert_eq!(seat.score(), 0);
    }

    #[test]
    fn reset_keeps_the_name() {
        let mut seat = Seat::new("Ada");
        seat.play(1, Weapon::Rock).unwrap();
        seat.win(1).unwrap();
        seat.reset();
        assert_eq!(seat.name(), "Ada");
        assert_eq!(seat.score(), 0);
        assert_eq!(seat.weapon(), None);
        assert!(seat.ledger().is_empty());
    }
}
