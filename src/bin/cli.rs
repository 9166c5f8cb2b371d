//! Console Binary
//!
//! Plays one game at the terminal: blinds are announced on stdout and the
//! winner is added to the league file.

use clap::Parser;
use colored::Colorize;
use poker_league::alerts::Realtime;
use poker_league::config::ConsoleConfig;
use poker_league::console::Console;
use poker_league::duplex::lines;
use poker_league::game::Holdem;
use poker_league::store::FileStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::parse();
    poker_league::log()?;
    poker_league::kys();
    let store = FileStore::open(&config.league.database)
        .inspect_err(|e| log::error!("could not load league: {}", e))?;
    let alerter = Realtime::current()?;
    let game = Holdem::new(Arc::new(store), Arc::new(alerter)).with_unit(config.league.unit);
    println!("{}", "Let's play poker".bold());
    println!("Type '{{Name}} wins' to record a win");
    match Console::new(lines(tokio::io::stdin()), Arc::new(std::io::stdout()), Arc::new(game))
        .play()
        .await
    {
        Ok(session) => log::info!("recorded win for {}", session.winner()),
        Err(e) => log::warn!("{}", e),
    }
    Ok(())
}
