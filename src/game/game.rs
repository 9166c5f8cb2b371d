use crate::duplex::Destination;

/// One seating of players, from blinds up to a declared winner.
///
/// Callers must invoke `start` exactly once and then `finish` at most once.
/// Implementations do not check this; [`super::Session`] enforces it at
/// compile time for drivers that want the guarantee.
pub trait Game: Send + Sync {
    /// Seat `players` and schedule every blind level to `destination`.
    /// Returns as soon as the schedule is registered.
    fn start(&self, players: usize, destination: Destination);
    /// Declare the winner.
    fn finish(&self, winner: &str);
}
