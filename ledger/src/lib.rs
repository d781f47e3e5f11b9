pub mod entry;
pub mod error;
pub mod history;
pub mod io;
pub mod models;

pub use entry::{Points, RoundEntry};
pub use error::LedgerError;
pub use history::GameHistory;
pub use io::{load_scorecard, parse_scorecard, save_scorecard, ScorecardFormat};
pub use models::{PlayerRecord, PointsRecord, RoundRecord, ScorecardRecord};
