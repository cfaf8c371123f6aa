use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::VecDeque;

/// Scripted view for driving the engine in tests.
///
/// Moves come from a queue, then from a seeded RNG if one was given. Running
/// out of both, or of rematch answers, behaves like the user quitting.
pub struct Script {
    name: String,
    moves: VecDeque<Weapon>,
    rng: Option<SmallRng>,
    rematches: VecDeque<bool>,
    events: Vec<String>,
    quits: usize,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            name: String::from("Ada"),
            moves: VecDeque::new(),
            rng: None,
            rematches: VecDeque::new(),
            events: Vec::new(),
            quits: 0,
        }
    }
}

impl Script {
    pub fn moves(moves: &[Weapon]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            ..Self::default()
        }
    }
    /// Endless uniformly random moves.
    pub fn random(seed: u64) -> Self {
        Self {
            rng: Some(SmallRng::seed_from_u64(seed)),
            ..Self::default()
        }
    }
    pub fn rematches(mut self, answers: &[bool]) -> Self {
        self.rematches = answers.iter().copied().collect();
        self
    }
    pub fn events(&self) -> &[String] {
        &self.events
    }
    /// Rounds reported so far.
    pub fn rounds(&self) -> usize {
        self.count("round")
    }
    pub fn count(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.split(' ').next() == Some(kind)).count()
    }
    pub fn quits(&self) -> usize {
        self.quits
    }
}

impl View for Script {
    fn display_welcome(&mut self) -> Result<(), Error> {
        Ok(self.events.push(String::from("welcome")))
    }
    fn display_goodbye(&mut self) -> Result<(), Error> {
        Ok(self.events.push(String::from("goodbye")))
    }
    fn retrieve_user_name(&mut self) -> Result<String, Error> {
        validate::name(&self.name).map_err(|_| Error::Interrupted)
    }
    fn retrieve_user_move(&mut self, weapons: &[Weapon]) -> Result<Weapon, Error> {
        match (self.moves.pop_front(), self.rng.as_mut()) {
            (Some(weapon), _) => Ok(weapon),
            (None, Some(rng)) => Ok(weapons[rng.random_range(0..weapons.len())]),
            (None, None) => Err(Error::Interrupted),
        }
    }
    fn play_again(&mut self) -> Result<bool, Error> {
        self.rematches.pop_front().ok_or(Error::Interrupted)
    }
    fn display_match_status(&mut self, round: Round, p1: &Seat, p2: &Seat) -> Result<(), Error> {
        Ok(self.events.push(format!(
            "status {} {}:{} {}:{}",
            round,
            p1.name(),
            p1.score(),
            p2.name(),
            p2.score()
        )))
    }
    fn display_round_info(
        &mut self,
        _: &Seat,
        _: &Seat,
        winner: Option<&str>,
        round: Round,
        gore: Option<&str>,
    ) -> Result<(), Error> {
        Ok(self.events.push(format!(
            "round {} {} {}",
            round,
            winner.unwrap_or("tie"),
            gore.unwrap_or_default()
        )))
    }
    fn display_match_results(&mut self, p1: &Seat, p2: &Seat, winner: &str) -> Result<(), Error> {
        Ok(self.events.push(format!(
            "results {}:{} {}:{} {}",
            p1.name(),
            p1.score(),
            p2.name(),
            p2.score(),
            winner
        )))
    }
    fn display_move_history(
        &mut self,
        round: Round,
        _: &Seat,
        _: &Seat,
        winner: &str,
    ) -> Result<(), Error> {
        Ok(self.events.push(format!("history {} {}", round, winner)))
    }
    fn display_computer_name(&mut self, name: &str) -> Result<(), Error> {
        Ok(self.events.push(format!("computer {}", name)))
    }
    fn quit(&mut self) {
        self.quits += 1;
    }
}
