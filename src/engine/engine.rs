use super::*;
use crate::Error;
use crate::N;
use crate::players::Player;
use crate::players::Seat;
use crate::view::View;
use std::marker::PhantomData;

/// Phase: waiting for both players to commit a move.
pub struct Awaiting;
/// Phase: the current round has been settled and reported.
pub struct Resolved;
/// Phase: a seat has reached the win threshold.
pub struct Complete;

/// One match between two players.
///
/// Uses the typestate pattern so that only legal transitions compile:
/// `Awaiting -> Resolved -> Awaiting | Complete`, and `Complete -> Awaiting`
/// through a rematch.
pub struct Match<Phase> {
    table: Table,
    players: [Box<dyn Player>; N],
    phase: PhantomData<Phase>,
}

impl<T> Match<T> {
    pub fn table(&self) -> &Table {
        &self.table
    }
    fn shift<U>(self) -> Match<U> {
        Match {
            table: self.table,
            players: self.players,
            phase: PhantomData,
        }
    }
}

impl Match<Awaiting> {
    /// Seats are index-aligned with players: `seats[i]` holds `players[i]`'s state.
    pub fn new(seats: [Seat; N], players: [Box<dyn Player>; N]) -> Self {
        Self {
            table: Table::new(seats),
            players,
            phase: PhantomData,
        }
    }
    /// Play out the current round: status, both decisions, resolution, report.
    pub fn play(mut self, view: &mut dyn View) -> Result<Match<Resolved>, Error> {
        let round = self.table.round();
        let [a, b] = self.table.seats();
        view.display_match_status(round, a, b)?;
        for pos in 0..N {
            let weapon = self.players[pos].decide(self.table.recall(pos), view)?;
            self.table.commit(pos, weapon)?;
        }
        let verdict = self.table.resolve()?;
        let [a, b] = self.table.seats();
        let winner = verdict.winner.map(|pos| self.table.seat(pos).name());
        log::debug!(
            "[engine] round {} {} vs {} -> {}",
            round,
            verdict.weapons[0],
            verdict.weapons[1],
            winner.unwrap_or("tie")
        );
        view.display_round_info(a, b, winner, round, verdict.gore.as_deref())?;
        Ok(self.shift())
    }
}

impl Match<Resolved> {
    /// Next round, or the end of the match if a seat reached the threshold.
    pub fn conclude(mut self) -> Result<Match<Awaiting>, Match<Complete>> {
        match self.table.complete() {
            true => {
                log::info!(
                    "[engine] match over after {} rounds: {} {} - {} {}",
                    self.table.round(),
                    self.table.seat(0).name(),
                    self.table.seat(0).score(),
                    self.table.seat(1).score(),
                    self.table.seat(1).name(),
                );
                for seat in self.table.seats() {
                    log::debug!("[engine] {} history\n{}", seat.name(), seat.ledger());
                }
                Err(self.shift())
            }
            false => {
                self.table.advance();
                Ok(self.shift())
            }
        }
    }
}

impl Match<Complete> {
    /// The seat that reached the threshold.
    pub fn winner(&self) -> &Seat {
        let pos = self.table.leader().unwrap_or_default();
        self.table.seat(pos)
    }
    /// Move history followed by final scores.
    pub fn report(&self, view: &mut dyn View) -> Result<(), Error> {
        let [a, b] = self.table.seats();
        let winner = self.winner().name();
        view.display_move_history(self.table.round(), a, b, winner)?;
        view.display_match_results(a, b, winner)
    }
    /// Fresh match with the same names: scores, round and ledgers reset, and
    /// every player told so it can reconsider its approach.
    pub fn rematch(mut self) -> Match<Awaiting> {
        log::info!("[engine] rematch");
        self.table.reset();
        self.players.iter_mut().for_each(|p| p.rematch());
        self.shift()
    }
}
