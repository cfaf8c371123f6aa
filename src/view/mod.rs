//! Presentation gateway.
//!
//! The engine talks to the terminal only through [`View`]. Two
//! implementations ship:
//!
//! - [`Console`]: line-oriented plain text over any reader/writer pair
//! - [`Prompt`]: interactive menus and confirmations (requires `cli` feature)
//!
//! Both share the free functions in [`format`] and [`validate`].
mod console;
pub mod format;
#[cfg(feature = "cli")]
mod prompt;
#[cfg(test)]
mod script;
pub mod validate;

pub use console::*;
#[cfg(feature = "cli")]
pub use prompt::*;
#[cfg(test)]
pub use script::*;

use crate::Error;
use crate::Round;
use crate::players::Seat;
use crate::weapons::Weapon;

/// Everything the engine needs from the outside world.
///
/// Input methods only return once they hold a valid answer; malformed input
/// is re-prompted inside the view and never reaches the engine. A user who
/// quits while being asked surfaces as [`Error::Interrupted`].
pub trait View: Send {
    fn display_welcome(&mut self) -> Result<(), Error>;
    fn display_goodbye(&mut self) -> Result<(), Error>;
    /// Validated and capitalised, see [`validate::name`].
    fn retrieve_user_name(&mut self) -> Result<String, Error>;
    fn retrieve_user_move(&mut self, weapons: &[Weapon]) -> Result<Weapon, Error>;
    fn play_again(&mut self) -> Result<bool, Error>;
    fn display_match_status(&mut self, round: Round, p1: &Seat, p2: &Seat) -> Result<(), Error>;
    fn display_round_info(
        &mut self,
        p1: &Seat,
        p2: &Seat,
        winner: Option<&str>,
        round: Round,
        gore: Option<&str>,
    ) -> Result<(), Error>;
    fn display_match_results(&mut self, p1: &Seat, p2: &Seat, winner: &str)
    -> Result<(), Error>;
    fn display_move_history(
        &mut self,
        round: Round,
        p1: &Seat,
        p2: &Seat,
        winner: &str,
    ) -> Result<(), Error>;
    fn display_computer_name(&mut self, name: &str) -> Result<(), Error>;
    /// Undo any terminal state the view changed.
    fn quit(&mut self) {}
    /// The same cleanup as [`quit`](View::quit), detached from the view so a
    /// signal handler can run it while the view is blocked on input.
    fn cleanup(&self) -> Cleanup {
        Cleanup::default()
    }
}

/// Deferred terminal cleanup, run at most once.
#[derive(Default)]
pub struct Cleanup(Option<Box<dyn FnOnce() + Send>>);

impl Cleanup {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self(Some(Box::new(f)))
    }
    pub fn run(mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}
