//! Webserver Binary
//!
//! Serves the league table over HTTP and runs live games over websockets.

use clap::Parser;
use poker_league::alerts::Realtime;
use poker_league::config::ServerConfig;
use poker_league::game::Holdem;
use poker_league::hosting::BridgeConfig;
use poker_league::hosting::Lounge;
use poker_league::hosting::Server;
use poker_league::store::FileStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    poker_league::log()?;
    poker_league::kys();
    let store = Arc::new(
        FileStore::open(&config.league.database)
            .inspect_err(|e| log::error!("could not load league: {}", e))?,
    );
    let alerter = Arc::new(Realtime::current()?);
    let game = Holdem::new(store.clone(), alerter).with_unit(config.league.unit);
    let bridge = BridgeConfig {
        max_frame: config.frame,
    };
    let lounge = Lounge::new(store, Arc::new(game), bridge);
    Server::run(lounge, &config.bind).await?;
    Ok(())
}
