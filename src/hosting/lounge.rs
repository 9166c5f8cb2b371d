use super::*;
use crate::BAD_PLAYER_PROMPT;
use crate::BAD_WINNER_PROMPT;
use crate::Error;
use crate::duplex::Destination;
use crate::duplex::Source;
use crate::game::Finished;
use crate::game::Game;
use crate::game::Session;
use crate::store::Store;
use std::sync::Arc;

/// Shared server state: one league, one game, and the websocket limits
/// every live connection is bridged with.
pub struct Lounge {
    store: Arc<dyn Store>,
    game: Arc<dyn Game>,
    bridge: BridgeConfig,
}

impl Lounge {
    pub fn new(store: Arc<dyn Store>, game: Arc<dyn Game>, bridge: BridgeConfig) -> Self {
        Self {
            store,
            game,
            bridge,
        }
    }
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
    pub fn bridge(&self) -> &BridgeConfig {
        &self.bridge
    }

    /// Run one live game: the first message is the player count, the
    /// second is the winner's name. Alerts go to `sink` as they fire.
    pub async fn host<S>(&self, mut source: S, sink: Destination) -> Result<Session<Finished>, Error>
    where
        S: Source,
    {
        let line = source.line().await;
        let session = Session::new(self.game.clone())
            .seat(&line, sink.clone())
            .inspect_err(|e| Self::reject(&sink, e, BAD_PLAYER_PROMPT))?;
        let line = source.line().await;
        let winner = Some(line.trim())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::Winner(line.clone()))
            .inspect_err(|e| Self::reject(&sink, e, BAD_WINNER_PROMPT))?;
        Ok(session.finish(winner))
    }

    fn reject(sink: &Destination, error: &Error, prompt: &str) {
        log::warn!("live game aborted: {}", error);
        sink.write(prompt.as_bytes())
            .inspect_err(|e| log::warn!("could not report bad input: {}", e))
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chips;
    use crate::duplex::lines;
    use crate::game::Holdem;
    use crate::store::MemoryStore;
    use std::sync::Mutex;
    use std::time::Duration;

    fn lounge(store: Arc<MemoryStore>) -> Lounge {
        let alerter = Arc::new(|_: Duration, amount: Chips, to: Destination| {
            crate::alerts::deliver(amount, to.as_ref())
        });
        let game = Arc::new(Holdem::new(store.clone(), alerter));
        Lounge::new(store, game, BridgeConfig::default())
    }

    fn text(buffer: &Mutex<Vec<u8>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[tokio::test]
    async fn count_then_winner() {
        let store = Arc::new(MemoryStore::default());
        let out = Arc::new(Mutex::new(Vec::<u8>::new()));
        let session = lounge(store.clone())
            .host(lines("3\nRuth\n".as_bytes()), out.clone())
            .await
            .unwrap();
        assert_eq!(session.winner(), "Ruth");
        assert_eq!(store.score("Ruth"), 1);
        assert!(text(&out).starts_with("Blind is now 100\nBlind is now 200\n"));
        assert_eq!(text(&out).lines().count(), crate::BLINDS.len());
    }

    #[tokio::test]
    async fn bad_count_is_reported_and_not_started() {
        let store = Arc::new(MemoryStore::default());
        let out = Arc::new(Mutex::new(Vec::<u8>::new()));
        let result = lounge(store.clone())
            .host(lines("lots\nRuth\n".as_bytes()), out.clone())
            .await;
        assert!(matches!(result, Err(Error::Players(_))));
        assert_eq!(text(&out), BAD_PLAYER_PROMPT);
        assert!(store.league().is_empty());
    }

    #[tokio::test]
    async fn dropped_connection_records_nobody() {
        let store = Arc::new(MemoryStore::default());
        let out = Arc::new(Mutex::new(Vec::<u8>::new()));
        let result = lounge(store.clone())
            .host(lines("4\n".as_bytes()), out.clone())
            .await;
        assert!(matches!(result, Err(Error::Winner(_))));
        assert!(store.league().is_empty());
        assert!(text(&out).ends_with(BAD_WINNER_PROMPT));
    }
}
