use std::path::PathBuf;
use std::time::Duration;

/// Settings shared by every front end.
#[derive(Debug, Clone, clap::Args)]
pub struct Config {
    /// League file, created if absent.
    #[arg(long, env = "LEAGUE_DB", default_value = "game.db.json")]
    pub database: PathBuf,
    /// Length of one blind time unit, e.g. 30s, 1m, 2h.
    #[arg(long, default_value = "1m", value_parser = unit)]
    pub unit: Duration,
}

/// Console front end.
#[derive(Debug, Clone, clap::Parser)]
#[command(version, about = "Play a game of poker at the terminal")]
pub struct ConsoleConfig {
    #[command(flatten)]
    pub league: Config,
}

/// HTTP and websocket front end.
#[derive(Debug, Clone, clap::Parser)]
#[command(version, about = "Serve the league and live games over HTTP")]
pub struct ServerConfig {
    #[command(flatten)]
    pub league: Config,
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
    pub bind: String,
    /// Largest websocket frame accepted from a client, in bytes.
    #[arg(long, default_value_t = 64 * 1024)]
    pub frame: usize,
}

fn unit(s: &str) -> Result<Duration, String> {
    crate::parse_duration(s)
        .filter(|d| !d.is_zero())
        .ok_or_else(|| format!("expected a duration like 30s, 5m or 2h, got {:?}", s))
}
