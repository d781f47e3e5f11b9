use std::{collections::HashSet, fmt::Display};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Player, ValidationError};

pub const MIN_PLAYERS: usize = 3;
pub const DEFAULT_GAME_NAME: &str = "Binokel Game";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    Ended,
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Active => write!(f, "active"),
            GameStatus::Ended => write!(f, "ended"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    pub players: Vec<Player>,
    pub status: GameStatus,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Game {
    /// Creates an active game. The roster order is kept as given and is the
    /// order standings are reported in.
    pub fn new(name: &str, players: Vec<Player>) -> Result<Self, ValidationError> {
        Self::new_started_at(name, players, Utc::now())
    }

    pub fn new_started_at(
        name: &str,
        players: Vec<Player>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if players.len() < MIN_PLAYERS {
            return Err(ValidationError::NotEnoughPlayers {
                min: MIN_PLAYERS,
                got: players.len(),
            });
        }
        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.id) {
                return Err(ValidationError::DuplicatePlayer(player.id));
            }
        }
        let name = if name.trim().is_empty() {
            DEFAULT_GAME_NAME
        } else {
            name
        };

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            players,
            status: GameStatus::Active,
            started_at,
            ended_at: None,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    pub fn contains(&self, player_id: Uuid) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn player(&self, player_id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn end(&mut self, now: DateTime<Utc>) -> Result<(), ValidationError> {
        if !self.is_active() {
            return Err(ValidationError::GameAlreadyEnded);
        }
        self.status = GameStatus::Ended;
        self.ended_at = Some(now);
        Ok(())
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.name,
            self.started_at.format("%Y-%m-%d %H:%M")
        )
    }
}
