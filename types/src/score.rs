use uuid::Uuid;

/// Points a non-maker earned in one round. The game maker's points live on
/// the [`Round`](crate::Round) itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub round_number: u32,
    pub player_id: Uuid,
    pub meld_points: u32,
    pub trick_points: u32,
}

impl Score {
    pub fn new(round_number: u32, player_id: Uuid, meld_points: u32, trick_points: u32) -> Self {
        Self {
            round_number,
            player_id,
            meld_points,
            trick_points,
        }
    }

    pub fn total_points(&self) -> i64 {
        i64::from(self.meld_points) + i64::from(self.trick_points)
    }

    /// Total rounded to the nearest ten, halves up.
    pub fn rounded_points(&self) -> i64 {
        let points = self.total_points();
        let remainder = points % 10;
        if remainder >= 5 {
            points + (10 - remainder)
        } else {
            points - remainder
        }
    }
}
