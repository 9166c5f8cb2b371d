use crate::Chips;
use crate::duplex::Destination;
use crate::duplex::Sink;
use std::time::Duration;

/// Schedules blind alerts.
///
/// Registration never blocks and cannot be retracted: once a schedule is
/// handed over, every alert fires exactly once, whether or not anyone is
/// still listening at the destination.
pub trait Alerter: Send + Sync {
    fn schedule(&self, delay: Duration, amount: Chips, destination: Destination);
}

impl<F> Alerter for F
where
    F: Fn(Duration, Chips, Destination) + Send + Sync,
{
    fn schedule(&self, delay: Duration, amount: Chips, destination: Destination) {
        self(delay, amount, destination)
    }
}

/// Human-readable alert line.
pub fn message(amount: Chips) -> String {
    format!("Blind is now {}\n", amount)
}

/// Write one alert. A gone destination is logged and otherwise ignored.
pub fn deliver(amount: Chips, destination: &dyn Sink) {
    match destination.write(message(amount).as_bytes()) {
        Ok(_) => log::debug!("blind is now {}", amount),
        Err(e) => log::warn!("blind alert {} not delivered: {}", amount, e),
    }
}
