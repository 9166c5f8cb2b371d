//! Game sessions.
//!
//! - [`Game`] — what a driver calls: start with a player count, finish with a winner
//! - [`Holdem`] — schedules the blind ladder and records the winner
//! - [`Session`] — typestate wrapper that only allows start, then finish
//! - [`Alert`] — one rung of the blind ladder
mod alert;
mod game;
mod holdem;
mod session;

pub use alert::*;
pub use game::*;
pub use holdem::*;
pub use session::*;
