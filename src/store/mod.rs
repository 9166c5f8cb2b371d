//! Durable league storage.
//!
//! - [`Store`] — the read/write surface every front end sees
//! - [`FileStore`] — league persisted as a full JSON snapshot per win
//! - [`MemoryStore`] — league kept in memory only
//! - [`Tape`] — overwrite sink that replaces prior content on every write
mod file;
mod memory;
mod resource;
mod tape;

pub use file::*;
pub use memory::*;
pub use resource::*;
pub use tape::*;

use crate::Wins;
use crate::league::League;

/// Read/write surface of a league store.
///
/// Implementations must tolerate `record` being called from several tasks;
/// a single lock around "mutate + persist" is enough.
pub trait Store: Send + Sync {
    /// Full ranked snapshot.
    fn league(&self) -> League;
    /// Wins for a player, zero if unknown.
    fn score(&self, name: &str) -> Wins;
    /// Add one win for a player. Persistence failures are logged, not returned.
    fn record(&self, name: &str);
}
