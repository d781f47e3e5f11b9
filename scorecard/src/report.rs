use itertools::Itertools;
use ledger::GameHistory;
use scoring::{PlayerStanding, Standings};
use serde::Serialize;
use types::GameStatus;

use crate::{OutputFormat, ScorecardError};

#[derive(Debug, Serialize)]
pub struct StandingsReport {
    pub game: String,
    pub status: String,
    pub rounds_played: usize,
    pub players: Standings,
    pub leader: Option<String>,
}

impl StandingsReport {
    pub fn new(history: &GameHistory) -> Self {
        let standings = history.standings();
        let leader = standings.leader().map(|s| s.name.clone());
        Self {
            game: history.game().name.clone(),
            status: history.game().status.to_string(),
            rounds_played: history.rounds().len(),
            players: standings,
            leader,
        }
    }
}

fn row(name_width: usize, standing: &PlayerStanding) -> String {
    format!(
        "{:<name_width$}  {:>4}  {:>6}",
        standing.name, standing.rounds_won, standing.score
    )
}

pub fn render_table(history: &GameHistory) -> String {
    let report = StandingsReport::new(history);
    let name_width = report
        .players
        .iter()
        .map(|s| s.name.chars().count())
        .chain(std::iter::once("Player".len()))
        .max()
        .unwrap_or_default();

    let mut lines = vec![
        format!("{} ({} rounds)", history.game(), report.rounds_played),
        format!("{:<name_width$}  {:>4}  {:>6}", "Player", "Won", "Score"),
    ];
    lines.extend(report.players.iter().map(|s| row(name_width, s)));
    lines.push(format!(
        "Leader: {}",
        report.leader.as_deref().unwrap_or("none")
    ));
    if history.game().status == GameStatus::Ended {
        if let Some(ended_at) = history.game().ended_at {
            lines.push(format!("Ended: {}", ended_at.format("%Y-%m-%d %H:%M")));
        }
    }
    lines.into_iter().join("\n")
}

pub fn render(history: &GameHistory, format: OutputFormat) -> Result<String, ScorecardError> {
    match format {
        OutputFormat::Table => Ok(render_table(history)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&StandingsReport::new(history))?),
    }
}
