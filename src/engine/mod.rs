//! Match orchestration.
//!
//! - [`Table`]: round counter and both seats; resolves a round into a [`Verdict`]
//! - [`Match`]: typestate round machine over a table and two players
//! - [`Session`]: welcome, matches, rematches, goodbye
mod engine;
mod session;
mod table;
mod verdict;

pub use engine::*;
pub use session::*;
pub use table::*;
pub use verdict::*;
