use super::*;
use crate::COMPUTER_NAMES;
use crate::Error;
use crate::players::Computer;
use crate::players::Human;
use crate::players::Seat;
use crate::view::View;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Top-level run loop: greet, name both sides, play matches until the human
/// declines a rematch, say goodbye.
///
/// The view is owned for the whole session and cleaned up on every exit path,
/// including the user quitting mid-prompt.
pub struct Session<V> {
    view: V,
    seed: Option<u64>,
}

impl<V> Session<V>
where
    V: View,
{
    pub fn new(view: V) -> Self {
        Self { view, seed: None }
    }
    /// Seed the computer opponent for a reproducible session.
    pub fn seeded(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
    pub fn view(&self) -> &V {
        &self.view
    }
    /// Run to completion.
    ///
    /// Returns [`Error::Interrupted`] if the user quit instead of declining a
    /// rematch; the goodbye has been shown and the view cleaned up either way.
    pub fn run(&mut self) -> Result<(), Error> {
        let result = self.play();
        match &result {
            Ok(()) => log::info!("[session] goodbye"),
            Err(Error::Interrupted) => {
                log::info!("[session] interrupted");
                if let Err(e) = self.view.display_goodbye() {
                    log::warn!("[session] goodbye failed: {}", e);
                }
            }
            Err(e) => log::error!("[session] {}", e),
        }
        self.view.quit();
        result
    }
    fn play(&mut self) -> Result<(), Error> {
        let ref mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        self.view.display_welcome()?;
        let human = self.view.retrieve_user_name()?;
        let computer = COMPUTER_NAMES.choose(rng).copied().unwrap_or("Computer");
        self.view.display_computer_name(computer)?;
        log::info!("[session] {} vs {}", human, computer);
        let mut game = Match::new(
            [Seat::new(human), Seat::new(computer)],
            [Box::new(Human), Box::new(Computer::from(SmallRng::from_rng(rng)))],
        );
        loop {
            let done = Self::contest(game, &mut self.view)?;
            done.report(&mut self.view)?;
            match self.view.play_again()? {
                true => game = done.rematch(),
                false => break,
            }
        }
        self.view.display_goodbye()
    }
    /// Rounds until a seat reaches the win threshold.
    fn contest(mut game: Match<Awaiting>, view: &mut V) -> Result<Match<Complete>, Error> {
        loop {
            match game.play(view)?.conclude() {
                Ok(next) => game = next,
                Err(done) => return Ok(done),
            }
        }
    }
}
