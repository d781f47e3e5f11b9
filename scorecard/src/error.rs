use ledger::LedgerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("{0}")]
    Ledger(#[from] LedgerError),

    #[error("No game file given: pass --game, set {0}, or add game_file to the config")]
    MissingGameFile(&'static str),

    #[error("Could not read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
