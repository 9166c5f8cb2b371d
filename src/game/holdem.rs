use super::*;
use crate::UNIT;
use crate::alerts::Alerter;
use crate::duplex::Destination;
use crate::store::Store;
use std::sync::Arc;
use std::time::Duration;

/// Texas hold'em night: escalating blinds, winner goes in the league.
///
/// Holds nothing per session, so one value serves every table.
#[derive(Clone)]
pub struct Holdem {
    store: Arc<dyn Store>,
    alerter: Arc<dyn Alerter>,
    unit: Duration,
}

impl Holdem {
    pub fn new(store: Arc<dyn Store>, alerter: Arc<dyn Alerter>) -> Self {
        Self {
            store,
            alerter,
            unit: UNIT,
        }
    }
    /// Length of one time unit of the blind cadence.
    pub fn with_unit(self, unit: Duration) -> Self {
        Self { unit, ..self }
    }
    pub fn unit(&self) -> Duration {
        self.unit
    }
}

impl Game for Holdem {
    fn start(&self, players: usize, destination: Destination) {
        log::info!(
            "starting game for {} players, blinds every {:?}",
            players,
            cadence(players, self.unit)
        );
        ladder(players, self.unit).into_iter().for_each(|alert| {
            self.alerter
                .schedule(alert.delay, alert.amount, destination.clone())
        });
    }

    fn finish(&self, winner: &str) {
        log::info!("{} wins", winner);
        self.store.record(winner);
    }
}
