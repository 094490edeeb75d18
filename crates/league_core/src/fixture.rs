//! Fixtures and match results.
//!
//! A fixture moves through exactly two states: `Scheduled -> Played`. Recording
//! draws both scores, settles the outcome, credits the winner, and appends the
//! canonical result line to the match history.

use serde::{Deserialize, Serialize};

use crate::error::LeagueError;
use crate::team::Team;
use crate::types::{decide_outcome, Outcome};
use crate::ScoreSource;

/// Defensive range check for scores arriving from outside the generator.
pub fn validate_score(value: u8, max: u8) -> Result<(), LeagueError> {
    if value > max {
        return Err(LeagueError::InvalidScore { value, max });
    }
    Ok(())
}

/// Lifecycle of a fixture. There is no cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixtureState {
    Scheduled,
    Played,
}

/// A pairing of two teams, scheduled and later played exactly once.
#[derive(Clone, Debug)]
pub struct Fixture {
    home: String,
    away: String,
    state: FixtureState,
}

impl Fixture {
    pub fn new(home: &Team, away: &Team) -> Self {
        Self {
            home: home.name().to_string(),
            away: away.name().to_string(),
            state: FixtureState::Scheduled,
        }
    }

    pub fn state(&self) -> FixtureState {
        self.state
    }

    /// The line announced when the fixture enters the schedule.
    pub fn announcement(&self) -> String {
        format!("Scheduled Match: {} vs {}", self.home, self.away)
    }

    /// Play the fixture. Draws one score per side from `scores`, validates
    /// both, settles the outcome, increments the winner's counter (no counter
    /// moves on a tie), and appends the result line to `history`.
    ///
    /// A fixture can only be recorded once; a second call fails with
    /// [`LeagueError::MatchAlreadyPlayed`] and mutates nothing.
    pub fn record(
        &mut self,
        home: &mut Team,
        away: &mut Team,
        scores: &mut dyn ScoreSource,
        max_score: u8,
        history: &mut Vec<String>,
    ) -> Result<MatchResult, LeagueError> {
        if self.state == FixtureState::Played {
            return Err(LeagueError::MatchAlreadyPlayed);
        }

        let home_score = scores.score(max_score);
        let away_score = scores.score(max_score);
        validate_score(home_score, max_score)?;
        validate_score(away_score, max_score)?;

        let result = MatchResult {
            home: home.name().to_string(),
            away: away.name().to_string(),
            home_score,
            away_score,
            outcome: decide_outcome(home_score, away_score),
        };

        match result.outcome {
            Outcome::WinA => home.record_win(),
            Outcome::WinB => away.record_win(),
            Outcome::Tie => {}
        }

        history.push(result.history_line());
        self.state = FixtureState::Played;
        Ok(result)
    }
}

/// The settled result of one match. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home: String,
    pub away: String,
    pub home_score: u8,
    pub away_score: u8,
    pub outcome: Outcome,
}

impl MatchResult {
    /// Canonical history entry: `"A (30) vs B (20)"`.
    pub fn history_line(&self) -> String {
        format!(
            "{} ({}) vs {} ({})",
            self.home, self.home_score, self.away, self.away_score
        )
    }

    /// Human-readable announcement, result line first, verdict second.
    pub fn announcement_lines(&self) -> Vec<String> {
        let verdict = match self.outcome {
            Outcome::WinA => format!("{} wins!", self.home),
            Outcome::WinB => format!("{} wins!", self.away),
            Outcome::Tie => "It's a tie! Both teams played hard.".to_string(),
        };
        vec![format!("Match Result: {}", self.history_line()), verdict]
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod fixture_tests;
