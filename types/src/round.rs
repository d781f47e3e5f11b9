use std::fmt::Display;

use uuid::Uuid;

/// How the game maker's bid turned out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    /// The maker went down voluntarily before play.
    Abgehen,
    /// The maker played and missed the bid.
    DoppeltAbgehen,
    /// No outcome flag was recorded.
    Unset,
}

impl Outcome {
    /// Resolves the stored outcome flags. When several are set the first in
    /// success, abgehen, doppelt abgehen order wins.
    pub fn from_flags(is_success: bool, is_abgehen: bool, is_doppelt_abgehen: bool) -> Self {
        if is_success {
            Outcome::Success
        } else if is_abgehen {
            Outcome::Abgehen
        } else if is_doppelt_abgehen {
            Outcome::DoppeltAbgehen
        } else {
            Outcome::Unset
        }
    }

    /// Inverse of [`Outcome::from_flags`]: `(is_success, is_abgehen, is_doppelt_abgehen)`.
    pub fn flags(self) -> (bool, bool, bool) {
        match self {
            Outcome::Success => (true, false, false),
            Outcome::Abgehen => (false, true, false),
            Outcome::DoppeltAbgehen => (false, false, true),
            Outcome::Unset => (false, false, false),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Abgehen => write!(f, "Abgehen"),
            Outcome::DoppeltAbgehen => write!(f, "DoppeltAbgehen"),
            Outcome::Unset => write!(f, "Unset"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub number: u32,
    pub game_maker: Uuid,
    pub bid_amount: u32,
    pub outcome: Outcome,
    /// Informational only.
    pub is_durch: bool,
    pub meld_points: u32,
    pub trick_points: u32,
    pub last_trick_winner: Option<Uuid>,
}

impl Round {
    /// Widened so that no pair of stored point values can overflow.
    pub fn maker_points(&self) -> i64 {
        i64::from(self.meld_points) + i64::from(self.trick_points)
    }

    pub fn is_made_by(&self, player_id: Uuid) -> bool {
        self.game_maker == player_id
    }
}

impl Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {}: bid {} ({}{})",
            self.number,
            self.bid_amount,
            self.outcome,
            if self.is_durch { ", durch" } else { "" }
        )
    }
}
