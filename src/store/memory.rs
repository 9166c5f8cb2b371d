use super::*;
use std::sync::PoisonError;
use std::sync::RwLock;

/// League held only in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    league: RwLock<League>,
}

impl From<League> for MemoryStore {
    fn from(league: League) -> Self {
        Self {
            league: RwLock::new(league),
        }
    }
}

impl Store for MemoryStore {
    fn league(&self) -> League {
        self.league
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
    fn score(&self, name: &str) -> Wins {
        self.league
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .wins(name)
    }
    fn record(&self, name: &str) {
        self.league
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .record(name);
    }
}
