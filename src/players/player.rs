use crate::Error;
use crate::Round;
use crate::ledger::Ledger;
use crate::view::View;
use crate::weapons::Weapon;

/// What a player may look at when choosing: the round about to be played and
/// both move histories so far.
#[derive(Debug, Clone, Copy)]
pub struct Recall<'a> {
    pub round: Round,
    pub own: &'a Ledger,
    pub opponent: &'a Ledger,
}

/// Trait for entities that pick weapons.
///
/// The engine owns score and history (see [`Seat`](super::Seat)); a player
/// only decides. Humans go through the view, computers consult their history.
pub trait Player: Send {
    /// Pick a weapon for `recall.round`.
    /// The engine commits the result to this player's ledger.
    fn decide(&mut self, recall: Recall<'_>, view: &mut dyn View) -> Result<Weapon, Error>;
    /// Called when a new match starts against the same opponent.
    fn rematch(&mut self) {}
}
