use thiserror::Error;
use types::ValidationError;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid game data: {0}")]
    Validation(#[from] ValidationError),

    #[error("Player not found: {0}")]
    UnknownPlayerName(String),

    #[error("Player name used twice: {0}")]
    DuplicatePlayerName(String),

    #[error("Unsupported scorecard format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
