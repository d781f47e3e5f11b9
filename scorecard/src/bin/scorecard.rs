use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use scorecard::{ConfigFile, OutputFormat, ScorecardConfig, ScorecardError};

/// Prints the standings of a Binokel scorecard.
#[derive(Parser, Debug)]
struct Params {
    /// Scorecard file (.yaml, .yml or .json)
    #[arg(short, long)]
    game: Option<PathBuf>,

    /// YAML config with `game_file` and `format`
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn try_main(args: Params) -> Result<String, ScorecardError> {
    let yaml_config = args
        .config
        .as_deref()
        .map(ConfigFile::load)
        .transpose()?;
    let config = ScorecardConfig::from_cli_or_env_or_yaml(args.game, args.format, yaml_config)?;
    log::info!("config: {config:?}");
    scorecard::run(&config)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");
    match try_main(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
