use std::collections::HashMap;

use types::Outcome;
use uuid::Uuid;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Points {
    pub meld_points: u32,
    pub trick_points: u32,
}

impl Points {
    pub fn new(meld_points: u32, trick_points: u32) -> Self {
        Self {
            meld_points,
            trick_points,
        }
    }
}

/// Everything needed to record one round. The round number is assigned by
/// [`GameHistory::record_round`](crate::GameHistory::record_round).
#[derive(Clone, Debug)]
pub struct RoundEntry {
    pub game_maker: Uuid,
    pub bid_amount: u32,
    pub outcome: Outcome,
    pub is_durch: bool,
    pub maker_points: Points,
    pub last_trick_winner: Option<Uuid>,
    /// Points of the other players. Anyone left out is recorded with zero.
    pub points: HashMap<Uuid, Points>,
}

impl RoundEntry {
    pub fn new(game_maker: Uuid, bid_amount: u32, outcome: Outcome) -> Self {
        Self {
            game_maker,
            bid_amount,
            outcome,
            is_durch: false,
            maker_points: Points::default(),
            last_trick_winner: None,
            points: HashMap::new(),
        }
    }

    pub fn maker_points(mut self, meld_points: u32, trick_points: u32) -> Self {
        self.maker_points = Points::new(meld_points, trick_points);
        self
    }

    pub fn durch(mut self) -> Self {
        self.is_durch = true;
        self
    }

    pub fn last_trick_winner(mut self, player_id: Uuid) -> Self {
        self.last_trick_winner = Some(player_id);
        self
    }

    pub fn points(mut self, player_id: Uuid, meld_points: u32, trick_points: u32) -> Self {
        self.points
            .insert(player_id, Points::new(meld_points, trick_points));
        self
    }
}
