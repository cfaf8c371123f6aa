//! Per-player move history.
//!
//! - [`Record`]: one committed move and whether it won its round
//! - [`Ledger`]: a player's records for the current match, keyed by round
mod ledger;
mod record;

pub use ledger::*;
pub use record::*;
