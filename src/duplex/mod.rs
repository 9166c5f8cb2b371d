//! Transport-agnostic I/O capabilities.
//!
//! Sessions, alerters and drivers only ever see a [`Sink`] to write to and
//! a [`Source`] to read lines from, so the same session logic runs behind a
//! terminal or a websocket.
mod sink;
mod source;

pub use sink::*;
pub use source::*;
