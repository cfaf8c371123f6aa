//! Who sits at the table and how they pick a weapon.
//!
//! - [`Seat`]: name, score, current weapon and ledger of one side
//! - [`Player`]: the decision-making half, given a [`Recall`]
//! - [`Human`]: asks the [`View`](crate::view::View)
//! - [`Computer`]: follows a [`Policy`] drawn at match start
mod computer;
mod human;
mod player;
mod policy;
mod seat;

pub use computer::*;
pub use human::*;
pub use player::*;
pub use policy::*;
pub use seat::*;
