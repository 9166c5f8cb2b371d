//! Home poker league: timed blind alerts and a durable win table.
//!
//! A game session schedules blind increases against an [`alerts::Alerter`]
//! and records the winner in a [`store::Store`]. Sessions are driven either
//! by the line-oriented [`console::Console`] or by a websocket bridged
//! through [`hosting`].
pub mod alerts;
pub mod console;
pub mod duplex;
pub mod game;
pub mod league;
pub mod store;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod hosting;

mod error;
pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Blind amounts announced to the table.
pub type Chips = u32;
/// Number of recorded wins for one player.
pub type Wins = u64;

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Blind ladder announced over the course of one session.
pub const BLINDS: [Chips; 11] = [100, 200, 300, 400, 500, 600, 800, 1000, 2000, 4000, 8000];
/// Base number of time units between blind levels, before adding one per player.
pub const CADENCE_BASE: u32 = 5;
/// Default length of one time unit.
pub const UNIT: std::time::Duration = std::time::Duration::from_secs(60);

// ============================================================================
// CONSOLE TEXT
// ============================================================================
pub const PLAYER_PROMPT: &str = "Please enter the number of players: ";
pub const BAD_PLAYER_PROMPT: &str = "Invalid input for the number of players... Try again.";
pub const BAD_WINNER_PROMPT: &str = "Invalid input for the winner of the game... Try again.";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Where the binaries keep one debug log per run.
#[cfg(feature = "server")]
pub const LOG_DIR: &str = "logs";

/// Log file for a run started `secs` seconds after the epoch.
#[cfg(feature = "server")]
pub fn logfile(secs: u64) -> std::path::PathBuf {
    std::path::Path::new(LOG_DIR).join(format!("league-{}.log", secs))
}

/// Info and up to stderr, so blind announcements on stdout stay readable;
/// debug and up to this run's [`logfile`]. Returns the file's path.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<std::path::PathBuf> {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let path = logfile(secs);
    std::fs::create_dir_all(LOG_DIR)?;
    let quiet = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            quiet.clone(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            quiet,
            std::fs::File::create(&path)?,
        ),
    ])?;
    log::debug!("league log at {}", path.display());
    Ok(path)
}

/// Ctrl+C ends the process on the spot. Scheduled blinds are simply
/// dropped; the league file is only written inside `Store::record`.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            eprintln!();
            log::warn!("game interrupted, pending blinds dropped");
            std::process::exit(130);
        }
    });
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_by_suffix() {
        assert_eq!(parse_duration("30s"), Some(std::time::Duration::from_secs(30)));
        assert_eq!(parse_duration("2m"), Some(std::time::Duration::from_secs(120)));
        assert_eq!(parse_duration(" 1h "), Some(std::time::Duration::from_secs(3600)));
        assert_eq!(parse_duration("10"), None);
        assert_eq!(parse_duration("m"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[cfg(feature = "server")]
    #[test]
    fn one_logfile_per_run() {
        assert_eq!(
            logfile(1_700_000_000),
            std::path::Path::new("logs").join("league-1700000000.log")
        );
        assert_ne!(logfile(1), logfile(2));
    }
}
