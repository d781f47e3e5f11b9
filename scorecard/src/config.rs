use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ScorecardError;

pub const GAME_FILE_ENV: &str = "BINOKEL_SCORECARD";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Optional YAML config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub game_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ScorecardError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScorecardError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScorecardConfig {
    pub game_file: PathBuf,
    pub format: OutputFormat,
}

impl ScorecardConfig {
    pub fn from_cli_or_env_or_yaml(
        cli_game: Option<PathBuf>,
        cli_format: Option<OutputFormat>,
        yaml_config: Option<ConfigFile>,
    ) -> Result<Self, ScorecardError> {
        let env_game = std::env::var(GAME_FILE_ENV).ok().map(PathBuf::from);
        Self::resolve(cli_game, env_game, cli_format, yaml_config)
    }

    fn resolve(
        cli_game: Option<PathBuf>,
        env_game: Option<PathBuf>,
        cli_format: Option<OutputFormat>,
        yaml_config: Option<ConfigFile>,
    ) -> Result<Self, ScorecardError> {
        let yaml = yaml_config.unwrap_or_default();
        let game_file = if let Some(arg) = cli_game {
            arg
        } else if let Some(env) = env_game {
            env
        } else if let Some(yaml) = yaml.game_file {
            yaml
        } else {
            return Err(ScorecardError::MissingGameFile(GAME_FILE_ENV));
        };
        let format = cli_format.or(yaml.format).unwrap_or_default();

        Ok(Self { game_file, format })
    }
}
