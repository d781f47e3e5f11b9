use std::collections::HashSet;

use chrono::{DateTime, Utc};
use scoring::{compute_scores, ScoreIndex, Standings};
use types::{Game, Round, Score, ValidationError};
use uuid::Uuid;

use crate::{LedgerError, Points, RoundEntry};

fn round_number_after(count: usize) -> Result<u32, ValidationError> {
    u32::try_from(count)
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or(ValidationError::RoundLimitReached(count))
}

/// A game together with its recorded rounds and the non-maker scores of
/// each round.
#[derive(Clone, Debug)]
pub struct GameHistory {
    game: Game,
    rounds: Vec<Round>,
    scores: Vec<Score>,
}

impl GameHistory {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            rounds: Vec::new(),
            scores: Vec::new(),
        }
    }

    /// Assembles a history from stored parts. Rounds are put in number order
    /// and the whole history is validated. Non-makers without a score for a
    /// round get a zero-point score, as if the round had been recorded through
    /// [`GameHistory::record_round`].
    pub fn from_parts(
        game: Game,
        mut rounds: Vec<Round>,
        scores: Vec<Score>,
    ) -> Result<Self, LedgerError> {
        rounds.sort_by_key(|r| r.number);
        let mut history = Self {
            game,
            rounds,
            scores,
        };
        history.validate()?;
        history.fill_missing_scores();
        Ok(history)
    }

    fn fill_missing_scores(&mut self) {
        let present: HashSet<(u32, Uuid)> = self
            .scores
            .iter()
            .map(|s| (s.round_number, s.player_id))
            .collect();
        let missing: Vec<Score> = self
            .rounds
            .iter()
            .flat_map(|round| {
                self.game
                    .players
                    .iter()
                    .filter(move |p| !round.is_made_by(p.id))
                    .map(move |p| (round.number, p.id))
            })
            .filter(|key| !present.contains(key))
            .map(|(round_number, player_id)| Score::new(round_number, player_id, 0, 0))
            .collect();
        if missing.is_empty() {
            return;
        }
        tracing::warn!(
            "'{}' was missing {} score records; recorded them with zero points",
            self.game.name,
            missing.len()
        );
        self.scores.extend(missing);
        self.scores.sort_by_key(|s| s.round_number);
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn round(&self, number: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.number == number)
    }

    pub fn scores_for_round(&self, number: u32) -> impl Iterator<Item = &Score> {
        self.scores.iter().filter(move |s| s.round_number == number)
    }

    pub fn next_round_number(&self) -> Result<u32, ValidationError> {
        round_number_after(self.rounds.len())
    }

    fn require_member(&self, player_id: Uuid) -> Result<(), ValidationError> {
        if self.game.contains(player_id) {
            Ok(())
        } else {
            Err(ValidationError::UnknownPlayer(player_id))
        }
    }

    /// Appends a round with the next round number and one score for every
    /// other player in the roster.
    pub fn record_round(&mut self, entry: RoundEntry) -> Result<&Round, LedgerError> {
        if !self.game.is_active() {
            return Err(ValidationError::GameNotActive.into());
        }
        let number = self.next_round_number()?;
        self.require_member(entry.game_maker)?;
        if entry.bid_amount == 0 {
            return Err(ValidationError::ZeroBid(number).into());
        }
        if let Some(winner) = entry.last_trick_winner {
            self.require_member(winner)?;
        }
        for &player_id in entry.points.keys() {
            self.require_member(player_id)?;
            if player_id == entry.game_maker {
                return Err(ValidationError::ScoreForGameMaker {
                    round: number,
                    player: player_id,
                }
                .into());
            }
        }

        let scores: Vec<Score> = self
            .game
            .players
            .iter()
            .filter(|p| p.id != entry.game_maker)
            .map(|p| {
                let points = entry.points.get(&p.id).copied().unwrap_or_default();
                Score::new(number, p.id, points.meld_points, points.trick_points)
            })
            .collect();
        self.scores.extend(scores);

        let Points {
            meld_points,
            trick_points,
        } = entry.maker_points;
        self.rounds.push(Round {
            number,
            game_maker: entry.game_maker,
            bid_amount: entry.bid_amount,
            outcome: entry.outcome,
            is_durch: entry.is_durch,
            meld_points,
            trick_points,
            last_trick_winner: entry.last_trick_winner,
        });

        let round = &self.rounds[self.rounds.len() - 1];
        tracing::info!(
            "Recorded round {} of '{}': maker {}, bid {}, {}",
            round.number,
            self.game.name,
            self.game
                .player(round.game_maker)
                .map_or_else(|| round.game_maker.to_string(), |p| p.name.clone()),
            round.bid_amount,
            round.outcome
        );
        Ok(round)
    }

    pub fn end_game(&mut self, now: DateTime<Utc>) -> Result<(), LedgerError> {
        self.game.end(now)?;
        tracing::info!(
            "Game '{}' ended after {} rounds",
            self.game.name,
            self.rounds.len()
        );
        Ok(())
    }

    pub fn score_index(&self) -> ScoreIndex {
        ScoreIndex::from_scores(&self.scores)
    }

    pub fn standings(&self) -> Standings {
        compute_scores(&self.game.players, &self.rounds, &self.score_index())
    }

    /// Checks the invariants the score engine relies on: gap-free round
    /// numbers from 1, makers and winners from the roster, positive bids, and
    /// at most one score per round and non-maker.
    pub fn validate(&self) -> Result<(), ValidationError> {
        tracing::debug!(
            "Validating '{}': {} rounds, {} scores",
            self.game.name,
            self.rounds.len(),
            self.scores.len()
        );
        for (expected, round) in (1..).zip(&self.rounds) {
            if round.number != expected {
                return Err(ValidationError::RoundNumberOutOfSequence {
                    expected,
                    found: round.number,
                });
            }
            self.require_member(round.game_maker)?;
            if let Some(winner) = round.last_trick_winner {
                self.require_member(winner)?;
            }
            if round.bid_amount == 0 {
                return Err(ValidationError::ZeroBid(round.number));
            }
        }

        let mut seen = HashSet::new();
        for score in &self.scores {
            let round = self
                .round(score.round_number)
                .ok_or(ValidationError::ScoreForUnknownRound(score.round_number))?;
            self.require_member(score.player_id)?;
            if round.is_made_by(score.player_id) {
                return Err(ValidationError::ScoreForGameMaker {
                    round: round.number,
                    player: score.player_id,
                });
            }
            if !seen.insert((score.round_number, score.player_id)) {
                return Err(ValidationError::DuplicateScore {
                    round: score.round_number,
                    player: score.player_id,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{Outcome, Player};

    fn history() -> GameHistory {
        let players = ["Alice", "Bob", "Charlie"]
            .iter()
            .map(|name| Player::new(name))
            .collect();
        GameHistory::new(Game::new("Test", players).unwrap())
    }

    fn id(history: &GameHistory, idx: usize) -> Uuid {
        history.game().players[idx].id
    }

    #[test]
    fn rounds_are_numbered_sequentially() {
        let mut history = history();
        let (alice, bob) = (id(&history, 0), id(&history, 1));

        let numbers: Vec<u32> = [alice, bob, alice]
            .into_iter()
            .map(|maker| {
                history
                    .record_round(RoundEntry::new(maker, 200, Outcome::Success))
                    .unwrap()
                    .number
            })
            .collect();
        assert_eq!(numbers, [1, 2, 3]);
        assert_eq!(history.next_round_number(), Ok(4));
    }

    #[test]
    fn round_numbers_stop_at_u32_range() {
        assert_eq!(round_number_after(0), Ok(1));
        assert_eq!(round_number_after(u32::MAX as usize - 1), Ok(u32::MAX));
        assert_eq!(
            round_number_after(u32::MAX as usize),
            Err(ValidationError::RoundLimitReached(u32::MAX as usize))
        );
    }

    #[test]
    fn every_non_maker_gets_a_score() {
        let mut history = history();
        let (alice, bob, charlie) = (id(&history, 0), id(&history, 1), id(&history, 2));

        history
            .record_round(
                RoundEntry::new(alice, 250, Outcome::Success)
                    .maker_points(100, 160)
                    .points(bob, 40, 50),
            )
            .unwrap();

        let scores: Vec<_> = history.scores_for_round(1).collect();
        assert_eq!(scores.len(), 2);
        assert!(scores.iter().all(|s| s.player_id != alice));
        let charlie_score = scores.iter().find(|s| s.player_id == charlie).unwrap();
        assert_eq!(charlie_score.total_points(), 0);
        let bob_score = scores.iter().find(|s| s.player_id == bob).unwrap();
        assert_eq!(bob_score.total_points(), 90);
    }

    #[test]
    fn rejects_points_for_the_maker() {
        let mut history = history();
        let alice = id(&history, 0);
        let err = history
            .record_round(RoundEntry::new(alice, 200, Outcome::Success).points(alice, 10, 10))
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::ScoreForGameMaker { round: 1, .. })
        ));
        assert!(history.rounds().is_empty());
        assert!(history.scores().is_empty());
    }

    #[test]
    fn rejects_outsiders_and_zero_bids() {
        let mut history = history();
        let stranger = Uuid::new_v4();
        let alice = id(&history, 0);

        let err = history
            .record_round(RoundEntry::new(stranger, 200, Outcome::Success))
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::UnknownPlayer(p)) if p == stranger
        ));

        let err = history
            .record_round(RoundEntry::new(alice, 0, Outcome::Success))
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::ZeroBid(1))
        ));

        let err = history
            .record_round(RoundEntry::new(alice, 200, Outcome::Success).last_trick_winner(stranger))
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::UnknownPlayer(_))
        ));
    }

    #[test]
    fn ended_game_takes_no_rounds() {
        let mut history = history();
        let alice = id(&history, 0);
        history.end_game(Utc::now()).unwrap();

        let err = history
            .record_round(RoundEntry::new(alice, 200, Outcome::Success))
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::GameNotActive)
        ));
        assert!(matches!(
            history.end_game(Utc::now()),
            Err(LedgerError::Validation(ValidationError::GameAlreadyEnded))
        ));
    }

    #[test]
    fn standings_follow_recorded_rounds() {
        let mut history = history();
        let (alice, bob, charlie) = (id(&history, 0), id(&history, 1), id(&history, 2));

        history
            .record_round(
                RoundEntry::new(alice, 200, Outcome::Success)
                    .maker_points(100, 150)
                    .points(bob, 30, 40)
                    .points(charlie, 0, 20),
            )
            .unwrap();
        history
            .record_round(
                RoundEntry::new(bob, 300, Outcome::DoppeltAbgehen)
                    .maker_points(80, 90)
                    .points(alice, 600, 0),
            )
            .unwrap();

        let standings = history.standings();
        assert_eq!(standings.get(alice).map(|s| (s.score, s.rounds_won)), Some((50, 1)));
        assert_eq!(standings.get(bob).map(|s| (s.score, s.rounds_won)), Some((-360, 0)));
        assert_eq!(standings.get(charlie).map(|s| (s.score, s.rounds_won)), Some((20, 0)));
        assert_eq!(standings.leader().map(|s| s.player_id), Some(alice));
    }

    fn stored_round(number: u32, maker: Uuid) -> Round {
        Round {
            number,
            game_maker: maker,
            bid_amount: 200,
            outcome: Outcome::Success,
            is_durch: false,
            meld_points: 0,
            trick_points: 0,
            last_trick_winner: None,
        }
    }

    #[test]
    fn from_parts_sorts_and_accepts_valid_history() {
        let base = history();
        let (alice, bob) = (id(&base, 0), id(&base, 1));
        let rounds = vec![stored_round(2, bob), stored_round(1, alice)];
        let scores = vec![Score::new(1, bob, 10, 10), Score::new(2, alice, 5, 5)];

        let history = GameHistory::from_parts(base.game().clone(), rounds, scores).unwrap();
        let numbers: Vec<u32> = history.rounds().iter().map(|r| r.number).collect();
        assert_eq!(numbers, [1, 2]);
    }

    #[test]
    fn from_parts_fills_missing_scores_with_zero() {
        let base = history();
        let (alice, bob, charlie) = (id(&base, 0), id(&base, 1), id(&base, 2));
        let rounds = vec![stored_round(1, alice), stored_round(2, bob)];
        let scores = vec![Score::new(1, bob, 30, 40)];

        let history = GameHistory::from_parts(base.game().clone(), rounds, scores).unwrap();
        assert_eq!(history.scores().len(), 4);
        for round in history.rounds() {
            let players: HashSet<Uuid> = history
                .scores_for_round(round.number)
                .map(|s| s.player_id)
                .collect();
            assert_eq!(players.len(), 2);
            assert!(!players.contains(&round.game_maker));
        }
        let kept = history.scores_for_round(1).find(|s| s.player_id == bob).unwrap();
        assert_eq!(kept.total_points(), 70);
        let filled = history.scores_for_round(1).find(|s| s.player_id == charlie).unwrap();
        assert_eq!(filled.total_points(), 0);
    }

    #[test]
    fn validate_rejects_gaps_and_duplicates() {
        let base = history();
        let alice = id(&base, 0);

        let gap = GameHistory::from_parts(
            base.game().clone(),
            vec![stored_round(1, alice), stored_round(3, alice)],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(
            gap,
            LedgerError::Validation(ValidationError::RoundNumberOutOfSequence {
                expected: 2,
                found: 3
            })
        ));

        let duplicate = GameHistory::from_parts(
            base.game().clone(),
            vec![stored_round(1, alice), stored_round(1, alice)],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(
            duplicate,
            LedgerError::Validation(ValidationError::RoundNumberOutOfSequence {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn validate_rejects_bad_scores() {
        let base = history();
        let (alice, bob) = (id(&base, 0), id(&base, 1));
        let game = base.game().clone();

        let maker_score = GameHistory::from_parts(
            game.clone(),
            vec![stored_round(1, alice)],
            vec![Score::new(1, alice, 10, 0)],
        )
        .unwrap_err();
        assert!(matches!(
            maker_score,
            LedgerError::Validation(ValidationError::ScoreForGameMaker { .. })
        ));

        let twice = GameHistory::from_parts(
            game.clone(),
            vec![stored_round(1, alice)],
            vec![Score::new(1, bob, 10, 0), Score::new(1, bob, 0, 10)],
        )
        .unwrap_err();
        assert!(matches!(
            twice,
            LedgerError::Validation(ValidationError::DuplicateScore { round: 1, .. })
        ));

        let orphan = GameHistory::from_parts(
            game,
            vec![stored_round(1, alice)],
            vec![Score::new(4, bob, 10, 0)],
        )
        .unwrap_err();
        assert!(matches!(
            orphan,
            LedgerError::Validation(ValidationError::ScoreForUnknownRound(4))
        ));
    }
}
