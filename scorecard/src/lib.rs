pub mod config;
pub mod error;
pub mod report;

pub use config::{ConfigFile, OutputFormat, ScorecardConfig};
pub use error::ScorecardError;
pub use report::{render, render_table, StandingsReport};

/// Loads the configured scorecard and renders its standings.
pub fn run(config: &ScorecardConfig) -> Result<String, ScorecardError> {
    let history = ledger::load_scorecard(&config.game_file)?;
    log::info!(
        "{} rounds recorded for {}",
        history.rounds().len(),
        history.game()
    );
    render(&history, config.format)
}
