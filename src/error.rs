/// Failures surfaced by the league store and the session drivers.
///
/// Only [`Error::Initialization`] and [`Error::Decode`] are fatal; they come
/// out of store construction. [`Error::Players`] and [`Error::Winner`] are
/// driver-local input problems that abort one interaction and leave stored
/// state untouched. Delivery failures never reach this type; they are logged
/// where they happen.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not initialize league resource: {0}")]
    Initialization(#[from] std::io::Error),
    #[error("unable to parse league: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid number of players: {0:?}")]
    Players(String),
    #[error("invalid winner line: {0:?}")]
    Winner(String),
}
