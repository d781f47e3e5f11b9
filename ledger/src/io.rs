use std::{fs, path::Path};

use crate::{GameHistory, LedgerError, ScorecardRecord};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScorecardFormat {
    Yaml,
    Json,
}

impl ScorecardFormat {
    pub fn from_path(path: &Path) -> Result<Self, LedgerError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(ScorecardFormat::Yaml),
            Some("json") => Ok(ScorecardFormat::Json),
            _ => Err(LedgerError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

pub fn parse_scorecard(text: &str, format: ScorecardFormat) -> Result<GameHistory, LedgerError> {
    let record: ScorecardRecord = match format {
        ScorecardFormat::Yaml => serde_yaml::from_str(text)?,
        ScorecardFormat::Json => serde_json::from_str(text)?,
    };
    GameHistory::try_from(record)
}

/// Reads and validates a scorecard; the format follows the file extension.
pub fn load_scorecard(path: &Path) -> Result<GameHistory, LedgerError> {
    let format = ScorecardFormat::from_path(path)?;
    let text = fs::read_to_string(path)?;
    let history = parse_scorecard(&text, format)?;
    tracing::info!(
        "Loaded '{}' from {}: {} players, {} rounds",
        history.game().name,
        path.display(),
        history.game().players.len(),
        history.rounds().len()
    );
    Ok(history)
}

pub fn save_scorecard(path: &Path, history: &GameHistory) -> Result<(), LedgerError> {
    let record = ScorecardRecord::from(history);
    let text = match ScorecardFormat::from_path(path)? {
        ScorecardFormat::Yaml => serde_yaml::to_string(&record)?,
        ScorecardFormat::Json => serde_json::to_string_pretty(&record)?,
    };
    fs::write(path, text)?;
    tracing::info!("Saved '{}' to {}", history.game().name, path.display());
    Ok(())
}
