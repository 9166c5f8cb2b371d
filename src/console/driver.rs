use crate::BAD_PLAYER_PROMPT;
use crate::BAD_WINNER_PROMPT;
use crate::Error;
use crate::PLAYER_PROMPT;
use crate::duplex::Destination;
use crate::duplex::Source;
use crate::game::Finished;
use crate::game::Game;
use crate::game::Session;
use std::sync::Arc;

/// Line-oriented driver for one game.
///
/// Asks for the number of players, starts the session, then waits for a
/// `"{Name} wins"` line and finishes it. Bad input gets a message on the
/// output and ends the interaction without touching the league.
pub struct Console<S> {
    source: S,
    output: Destination,
    game: Arc<dyn Game>,
}

impl<S> Console<S>
where
    S: Source,
{
    pub fn new(source: S, output: Destination, game: Arc<dyn Game>) -> Self {
        Self {
            source,
            output,
            game,
        }
    }

    pub async fn play(&mut self) -> Result<Session<Finished>, Error> {
        self.say(PLAYER_PROMPT);
        let line = self.source.line().await;
        let session = Session::new(self.game.clone())
            .seat(&line, self.output.clone())
            .inspect_err(|_| self.say(BAD_PLAYER_PROMPT))?;
        let line = self.source.line().await;
        let winner = Self::winner(&line).inspect_err(|_| self.say(BAD_WINNER_PROMPT))?;
        Ok(session.finish(winner))
    }
}

impl<S> Console<S> {
    fn winner(line: &str) -> Result<&str, Error> {
        let mut words = line.trim().split(' ');
        match (words.next(), words.next(), words.next()) {
            (Some(name), Some("wins"), None) if !name.is_empty() => Ok(name),
            _ => Err(Error::Winner(line.to_string())),
        }
    }

    fn say(&self, text: &str) {
        self.output
            .write(text.as_bytes())
            .inspect_err(|e| log::warn!("console output failed: {}", e))
            .ok();
    }
}
