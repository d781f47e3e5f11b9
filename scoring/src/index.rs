use std::collections::HashMap;

use types::Score;
use uuid::Uuid;

/// Lookup of non-maker scores keyed by `(round_number, player_id)`.
#[derive(Clone, Debug, Default)]
pub struct ScoreIndex {
    scores: HashMap<(u32, Uuid), Score>,
}

impl ScoreIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scores<'a>(scores: impl IntoIterator<Item = &'a Score>) -> Self {
        let mut index = Self::new();
        for score in scores {
            index.insert(score.clone());
        }
        index
    }

    /// Returns the score previously stored for the same round and player.
    pub fn insert(&mut self, score: Score) -> Option<Score> {
        self.scores
            .insert((score.round_number, score.player_id), score)
    }

    pub fn get(&self, round_number: u32, player_id: Uuid) -> Option<&Score> {
        self.scores.get(&(round_number, player_id))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_round_and_player() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let scores = [Score::new(1, alice, 20, 30), Score::new(2, bob, 0, 60)];
        let index = ScoreIndex::from_scores(&scores);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get(1, alice).map(Score::total_points), Some(50));
        assert_eq!(index.get(2, bob).map(Score::total_points), Some(60));
        assert!(index.get(1, bob).is_none());
        assert!(index.get(3, alice).is_none());
    }

    #[test]
    fn insert_replaces_same_key() {
        let alice = Uuid::new_v4();
        let mut index = ScoreIndex::new();
        assert!(index.insert(Score::new(1, alice, 10, 0)).is_none());
        let previous = index.insert(Score::new(1, alice, 40, 0));
        assert_eq!(previous.map(|s| s.meld_points), Some(10));
        assert_eq!(index.len(), 1);
    }
}
