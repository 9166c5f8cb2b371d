//! HTTP and websocket front end.
//!
//! ## Core Types
//!
//! - [`Lounge`] — shared state: the league store and the game
//! - [`Bridge`] — turns a websocket into a line [`Source`](crate::duplex::Source)
//!   and a message [`Sink`](crate::duplex::Sink)
//! - [`Server`] — actix-web routes for the league and live games
mod bridge;
mod lounge;
mod server;

pub use bridge::*;
pub use lounge::*;
pub use server::*;
