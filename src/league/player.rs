use crate::Wins;

/// One row of the league table.
/// Field names on disk are `Name` and `Wins`, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Wins")]
    pub wins: Wins,
}

impl Player {
    pub fn new(name: &str, wins: Wins) -> Self {
        Self {
            name: name.to_string(),
            wins,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.wins)
    }
}
