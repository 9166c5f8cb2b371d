//! Blind alert scheduling.
//!
//! An [`Alerter`] takes "tell this destination the blind is now X, after
//! delay D" and returns immediately. [`Realtime`] fires on tokio timers.
mod alerter;
mod realtime;

pub use alerter::*;
pub use realtime::*;
