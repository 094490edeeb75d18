use thiserror::Error;

/// Errors produced by the league domain model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("a team must have exactly {expected} players, got {found}")]
    InvalidTeamSize { expected: u8, found: usize },

    #[error("score {value} is outside the valid range 0..={max}")]
    InvalidScore { value: u8, max: u8 },

    #[error("match has already been played and cannot be re-recorded")]
    MatchAlreadyPlayed,

    #[error("team name is already taken: {0}")]
    DuplicateTeamName(String),

    #[error("league config error: {0}")]
    Config(String),
}
