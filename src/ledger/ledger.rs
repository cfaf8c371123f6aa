use super::*;
use crate::Error;
use crate::Round;
use crate::weapons::Weapon;
use std::collections::BTreeMap;

/// One player's move history for the current match.
///
/// Append-only: entries are inserted once per round and only ever have their
/// `won` flag raised. A rematch starts from a fresh ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger(BTreeMap<Round, Record>);

impl Ledger {
    /// Commit `weapon` as this player's move for `round`, not yet won.
    pub fn record(&mut self, round: Round, weapon: Weapon) -> Result<&Record, Error> {
        match self.0.contains_key(&round) {
            true => Err(Error::Duplicate(round)),
            false => Ok(self.0.entry(round).or_insert(Record::new(round, weapon))),
        }
    }
    /// Mark the move committed for `round` as the round's winner.
    pub fn mark_won(&mut self, round: Round) -> Result<(), Error> {
        self.0
            .get_mut(&round)
            .map(Record::win)
            .ok_or(Error::Missing(round))
    }
    /// The move committed for `round`, if any. Round 0 never has one.
    pub fn get(&self, round: Round) -> Option<&Record> {
        self.0.get(&round)
    }
    /// Records in round order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.0.values()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn last(&self) -> Option<&Record> {
        self.0.values().next_back()
    }
    pub fn wins(&self) -> usize {
        self.0.values().filter(|r| r.won()).count()
    }
}

impl std::fmt::Display for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for record in self.records() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
