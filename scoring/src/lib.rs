pub mod engine;
pub mod index;
pub mod standings;

pub use engine::{apply_rollover, bid_delta, compute_scores, maker_contribution, SEGMENT_POINTS};
pub use index::ScoreIndex;
pub use standings::{PlayerStanding, Standings};
