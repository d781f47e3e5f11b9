use itertools::Itertools;
use log;
use types::{Outcome, Player, Round, Score};

use crate::{PlayerStanding, ScoreIndex, Standings};

/// Points that make up one won segment.
pub const SEGMENT_POINTS: i64 = 1000;

/// Signed bid result for the game maker. An unset outcome is charged like a
/// failed attempt.
pub fn bid_delta(outcome: Outcome, bid_amount: u32) -> i64 {
    let bid = i64::from(bid_amount);
    match outcome {
        Outcome::Success => bid,
        Outcome::Abgehen => -bid,
        Outcome::DoppeltAbgehen | Outcome::Unset => -2 * bid,
    }
}

/// What the round is worth to its game maker: the bid result plus the
/// maker's own meld and trick points. `is_durch` has no effect.
pub fn maker_contribution(round: &Round) -> i64 {
    bid_delta(round.outcome, round.bid_amount) + round.maker_points()
}

/// Converts every full 1000 points into a won segment, keeping the rest.
/// Negative scores are left alone.
pub fn apply_rollover(score: i64, rounds_won: u32) -> (i64, u32) {
    if score < SEGMENT_POINTS {
        return (score, rounds_won);
    }
    let segments = score / SEGMENT_POINTS;
    let won = u32::try_from(segments).unwrap_or(u32::MAX);
    (score % SEGMENT_POINTS, rounds_won.saturating_add(won))
}

fn contribution(round: &Round, player: &Player, scores: &ScoreIndex) -> i64 {
    if round.is_made_by(player.id) {
        maker_contribution(round)
    } else {
        scores
            .get(round.number, player.id)
            .map_or(0, Score::total_points)
    }
}

/// Computes each roster player's running score and won segments over the
/// whole round history.
///
/// Rounds are folded in ascending round number whatever order the slice is
/// in, and the rollover is applied after every round for every player.
pub fn compute_scores(players: &[Player], rounds: &[Round], scores: &ScoreIndex) -> Standings {
    let ordered: Vec<&Round> = rounds.iter().sorted_by_key(|r| r.number).collect();

    let entries = players
        .iter()
        .map(|player| {
            let (score, rounds_won) =
                ordered
                    .iter()
                    .fold((0_i64, 0_u32), |(score, rounds_won), round| {
                        let delta = contribution(round, player, scores);
                        let (next, won) = apply_rollover(score + delta, rounds_won);
                        log::debug!(
                            "{} round {}: {score} {delta:+} -> {next} ({won} won)",
                            player.name,
                            round.number
                        );
                        if won > rounds_won {
                            log::debug!(
                                "{} completed {} segment(s) in round {}",
                                player.name,
                                won - rounds_won,
                                round.number
                            );
                        }
                        (next, won)
                    });
            PlayerStanding {
                player_id: player.id,
                name: player.name.clone(),
                score,
                rounds_won,
            }
        })
        .collect();

    Standings::from_entries(entries)
}
