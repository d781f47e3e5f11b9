use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("A game needs at least {min} players, got {got}")]
    NotEnoughPlayers { min: usize, got: usize },

    #[error("Player listed twice in roster: {0}")]
    DuplicatePlayer(Uuid),

    #[error("Player is not part of this game: {0}")]
    UnknownPlayer(Uuid),

    #[error("Bid amount must be positive (round {0})")]
    ZeroBid(u32),

    #[error("Round number out of sequence: expected {expected}, found {found}")]
    RoundNumberOutOfSequence { expected: u32, found: u32 },

    #[error("More than one score for player {player} in round {round}")]
    DuplicateScore { round: u32, player: Uuid },

    #[error("Game maker {player} cannot have a score record in round {round}")]
    ScoreForGameMaker { round: u32, player: Uuid },

    #[error("Score references round {0}, which does not exist")]
    ScoreForUnknownRound(u32),

    #[error("No round number left after {0} rounds")]
    RoundLimitReached(usize),

    #[error("Game has already ended")]
    GameAlreadyEnded,

    #[error("Cannot add rounds to an inactive game")]
    GameNotActive,
}
