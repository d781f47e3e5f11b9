use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use types::{Game, GameStatus, Outcome, Player, Round, Score, DEFAULT_GAME_NAME};
use uuid::Uuid;

use crate::{GameHistory, LedgerError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointsRecord {
    #[serde(default)]
    pub meld_points: u32,
    #[serde(default)]
    pub trick_points: u32,
}

/// One round as stored: players are referenced by name and the outcome is
/// kept as the four independent flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_number: u32,
    pub game_maker: String,
    pub bid_amount: u32,
    #[serde(default)]
    pub is_success: bool,
    #[serde(default)]
    pub is_abgehen: bool,
    #[serde(default)]
    pub is_durch: bool,
    #[serde(default)]
    pub is_doppelt_abgehen: bool,
    #[serde(default)]
    pub meld_points: u32,
    #[serde(default)]
    pub trick_points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_trick_winner: Option<String>,
    #[serde(default)]
    pub scores: BTreeMap<String, PointsRecord>,
}

fn default_game_name() -> String {
    DEFAULT_GAME_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default = "default_game_name")]
    pub name: String,
    #[serde(default = "Utc::now")]
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    pub players: Vec<PlayerRecord>,
    #[serde(default)]
    pub rounds: Vec<RoundRecord>,
}

impl TryFrom<ScorecardRecord> for GameHistory {
    type Error = LedgerError;

    fn try_from(record: ScorecardRecord) -> Result<Self, Self::Error> {
        let mut ids: HashMap<String, Uuid> = HashMap::new();
        let mut players = Vec::with_capacity(record.players.len());
        for player in &record.players {
            let id = player.id.unwrap_or_else(Uuid::new_v4);
            if ids.insert(player.name.clone(), id).is_some() {
                return Err(LedgerError::DuplicatePlayerName(player.name.clone()));
            }
            players.push(Player::new_with_id(id, &player.name));
        }
        let lookup = |name: &str| {
            ids.get(name)
                .copied()
                .ok_or_else(|| LedgerError::UnknownPlayerName(name.to_string()))
        };

        let mut rounds = Vec::with_capacity(record.rounds.len());
        let mut scores = Vec::new();
        for round in &record.rounds {
            rounds.push(Round {
                number: round.round_number,
                game_maker: lookup(&round.game_maker)?,
                bid_amount: round.bid_amount,
                outcome: Outcome::from_flags(
                    round.is_success,
                    round.is_abgehen,
                    round.is_doppelt_abgehen,
                ),
                is_durch: round.is_durch,
                meld_points: round.meld_points,
                trick_points: round.trick_points,
                last_trick_winner: round
                    .last_trick_winner
                    .as_deref()
                    .map(lookup)
                    .transpose()?,
            });
            for (name, points) in &round.scores {
                scores.push(Score::new(
                    round.round_number,
                    lookup(name)?,
                    points.meld_points,
                    points.trick_points,
                ));
            }
        }

        let mut game = Game::new_started_at(&record.name, players, record.started_at)?;
        if let Some(id) = record.id {
            game.id = id;
        }
        if let Some(ended_at) = record.ended_at {
            game.end(ended_at)?;
        }
        GameHistory::from_parts(game, rounds, scores)
    }
}

impl From<&GameHistory> for ScorecardRecord {
    fn from(history: &GameHistory) -> Self {
        let game = history.game();
        let name_of = |id: Uuid| {
            game.player(id)
                .map_or_else(|| id.to_string(), |p| p.name.clone())
        };

        let rounds = history
            .rounds()
            .iter()
            .map(|round| {
                let (is_success, is_abgehen, is_doppelt_abgehen) = round.outcome.flags();
                RoundRecord {
                    round_number: round.number,
                    game_maker: name_of(round.game_maker),
                    bid_amount: round.bid_amount,
                    is_success,
                    is_abgehen,
                    is_durch: round.is_durch,
                    is_doppelt_abgehen,
                    meld_points: round.meld_points,
                    trick_points: round.trick_points,
                    last_trick_winner: round.last_trick_winner.map(name_of),
                    scores: history
                        .scores_for_round(round.number)
                        .map(|s| {
                            (
                                name_of(s.player_id),
                                PointsRecord {
                                    meld_points: s.meld_points,
                                    trick_points: s.trick_points,
                                },
                            )
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            id: Some(game.id),
            name: game.name.clone(),
            started_at: game.started_at,
            ended_at: match game.status {
                GameStatus::Active => None,
                GameStatus::Ended => game.ended_at,
            },
            players: game
                .players
                .iter()
                .map(|p| PlayerRecord {
                    id: Some(p.id),
                    name: p.name.clone(),
                })
                .collect(),
            rounds,
        }
    }
}
