use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerStanding {
    pub player_id: Uuid,
    pub name: String,
    /// Points carried toward the next 1000. May be negative.
    pub score: i64,
    pub rounds_won: u32,
}

impl Display for PlayerStanding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} won, {} points",
            self.name, self.rounds_won, self.score
        )
    }
}

/// Per-player results in roster order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Standings {
    entries: Vec<PlayerStanding>,
}

impl Standings {
    pub(crate) fn from_entries(entries: Vec<PlayerStanding>) -> Self {
        Self { entries }
    }

    pub fn get(&self, player_id: Uuid) -> Option<&PlayerStanding> {
        self.entries.iter().find(|s| s.player_id == player_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerStanding> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The player with strictly the most rounds won. Ties, including a
    /// table where nobody has won a round yet, have no leader.
    pub fn leader(&self) -> Option<&PlayerStanding> {
        let best = self.entries.iter().map(|s| s.rounds_won).max()?;
        if best == 0 {
            return None;
        }
        self.entries
            .iter()
            .filter(|s| s.rounds_won == best)
            .exactly_one()
            .ok()
    }
}

impl<'a> IntoIterator for &'a Standings {
    type Item = &'a PlayerStanding;
    type IntoIter = std::slice::Iter<'a, PlayerStanding>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.entries.iter().join("; "))
    }
}
