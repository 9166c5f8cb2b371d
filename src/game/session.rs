use super::*;
use crate::Error;
use crate::duplex::Destination;
use std::marker::PhantomData;
use std::sync::Arc;

/// Phase: players not yet seated.
pub struct Idle;
/// Phase: blinds scheduled, waiting on a winner.
pub struct Running;
/// Phase: winner recorded.
pub struct Finished;

/// One run of a [`Game`], from seating to winner.
///
/// Uses typestate so a session can only be started once and finished
/// after it started.
pub struct Session<Phase> {
    game: Arc<dyn Game>,
    winner: Option<String>,
    phase: PhantomData<Phase>,
}

impl Session<Idle> {
    pub fn new(game: Arc<dyn Game>) -> Self {
        Self {
            game,
            winner: None,
            phase: PhantomData,
        }
    }
    /// Read a player count off one input line and start on it.
    /// A line that isn't a count leaves the game untouched.
    pub fn seat(self, line: &str, destination: Destination) -> Result<Session<Running>, Error> {
        players(line).map(|n| self.start(n, destination))
    }
    pub fn start(self, players: usize, destination: Destination) -> Session<Running> {
        self.game.start(players, destination);
        Session {
            game: self.game,
            winner: None,
            phase: PhantomData,
        }
    }
}

impl Session<Running> {
    pub fn finish(self, winner: &str) -> Session<Finished> {
        self.game.finish(winner);
        Session {
            game: self.game,
            winner: Some(winner.to_string()),
            phase: PhantomData,
        }
    }
}

impl Session<Finished> {
    pub fn winner(&self) -> &str {
        self.winner.as_deref().unwrap_or_default()
    }
}

/// Player count as typed by a human: surrounding whitespace is ignored,
/// anything but a non-negative integer is rejected.
pub fn players(line: &str) -> Result<usize, Error> {
    line.trim()
        .parse::<usize>()
        .map_err(|_| Error::Players(line.to_string()))
}
