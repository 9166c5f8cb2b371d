use super::*;
use crate::Error;
use crate::Wins;
use std::io::Read;

/// Players ranked by wins, most first.
///
/// Records are kept in the order players were first introduced, and the
/// ranking is re-derived from them with a stable sort after every change.
/// Players on equal wins therefore always rank in introduction order, no
/// matter how they reached that count. Lookups are linear; a league is a
/// handful of friends, not a database.
///
/// On disk a league is the JSON array of records in introduction order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<Player>", into = "Vec<Player>")]
pub struct League {
    records: Vec<Player>,
    ranked: Vec<Player>,
}

impl From<Vec<Player>> for League {
    fn from(records: Vec<Player>) -> Self {
        let mut league = Self {
            records,
            ranked: Vec::new(),
        };
        league.rank();
        league
    }
}

impl From<League> for Vec<Player> {
    fn from(league: League) -> Self {
        league.records
    }
}

impl League {
    /// Decode a full record set and rank it.
    /// Empty (or all-whitespace) input is an empty league, not an error.
    pub fn load<R>(mut reader: R) -> Result<Self, Error>
    where
        R: Read,
    {
        let ref mut text = String::new();
        reader.read_to_string(text)?;
        match text.trim() {
            "" => Ok(Self::default()),
            json => Ok(serde_json::from_str::<Self>(json)?),
        }
    }

    /// Full snapshot encoding, as written to the backing resource.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(&self.records)?)
    }

    /// Position of the named player in the current ranking.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.ranked.iter().position(|p| p.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.records.iter().find(|p| p.name == name)
    }

    /// Wins for the named player, zero if unknown.
    pub fn wins(&self, name: &str) -> Wins {
        self.get(name).map(|p| p.wins).unwrap_or_default()
    }

    /// Add one win, introducing the player at the bottom if unseen, then re-rank.
    /// A player already at [`Wins::MAX`] keeps that count and nothing changes;
    /// the return value says whether the league moved.
    pub fn record(&mut self, name: &str) -> bool {
        match self.records.iter().position(|p| p.name == name) {
            Some(i) => match self.records[i].wins.checked_add(1) {
                Some(wins) => self.records[i] = Player::new(name, wins),
                None => {
                    log::warn!("{} is already on {} wins, win not counted", name, Wins::MAX);
                    return false;
                }
            },
            None => self.records.push(Player::new(name, 1)),
        }
        self.rank();
        true
    }

    /// Players in rank order.
    pub fn players(&self) -> &[Player] {
        &self.ranked
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    /// Sum of wins across every player, pinned at [`Wins::MAX`].
    pub fn total(&self) -> Wins {
        self.records
            .iter()
            .fold(0 as Wins, |sum, p| sum.saturating_add(p.wins))
    }

    fn rank(&mut self) {
        self.ranked = self.records.clone();
        self.ranked.sort_by(|a, b| b.wins.cmp(&a.wins));
    }
}

impl IntoIterator for League {
    type Item = Player;
    type IntoIter = std::vec::IntoIter<Player>;
    fn into_iter(self) -> Self::IntoIter {
        self.ranked.into_iter()
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.ranked
            .iter()
            .enumerate()
            .try_for_each(|(i, p)| writeln!(f, "{:>3}. {}", i + 1, p))
    }
}
