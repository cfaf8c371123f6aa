//! The five weapons and how they defeat each other.
//!
//! - [`Weapon`]: the enum, its beats relation, input keys and sampling
//! - [`gore`]: flavor text for each of the ten winning pairs
mod gore;
mod weapon;

pub use gore::*;
pub use weapon::*;
