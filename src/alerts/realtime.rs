use super::*;
use crate::Chips;
use crate::duplex::Destination;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::runtime::TryCurrentError;

/// Fires each alert from its own tokio task after sleeping out the delay.
///
/// Alerts of one schedule run independently of each other and of the
/// caller; a slow or dead destination only costs its own task.
#[derive(Debug, Clone)]
pub struct Realtime {
    handle: Handle,
}

impl From<Handle> for Realtime {
    fn from(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Realtime {
    /// Bind to the runtime of the calling context.
    pub fn current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::from)
    }
}

impl Alerter for Realtime {
    fn schedule(&self, delay: Duration, amount: Chips, destination: Destination) {
        log::debug!("blind {} scheduled in {:?}", amount, delay);
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            deliver(amount, destination.as_ref());
        });
    }
}
