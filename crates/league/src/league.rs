//! The league itself: an ordered set of teams plus the match history, and the
//! season driver that takes every round-robin pairing through scheduling and
//! recording.

use league_core::{Fixture, LeagueError, MatchResult, Player, ScoreSource, Team};

use crate::config::LeagueConfig;
use crate::schedule::round_robin_pairings;
use crate::scoring::MAX_SCORE;

/// One league instance. Lives for one program run; nothing persists.
#[derive(Clone, Debug, Default)]
pub struct League {
    teams: Vec<Team>,
    history: Vec<String>,
}

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a league from explicit roster configuration. Every team is
    /// validated; the first bad team aborts construction and surfaces to the
    /// caller.
    pub fn from_config(config: &LeagueConfig) -> Result<Self, LeagueError> {
        let mut league = Self::new();
        for team_config in &config.teams {
            // Roster lengths above u8 range are invalid sizes, not wrap-arounds.
            let size = u8::try_from(team_config.players.len()).map_err(|_| {
                LeagueError::InvalidTeamSize {
                    expected: league_core::REQUIRED_TEAM_SIZE,
                    found: team_config.players.len(),
                }
            })?;
            let mut team = Team::new(&team_config.name, size)?;
            for player in &team_config.players {
                team.add_player(Player::new(&player.name, player.role));
            }
            league.add_team(team)?;
        }
        Ok(league)
    }

    /// Add a team. Team names are unique within a league instance.
    pub fn add_team(&mut self, team: Team) -> Result<(), LeagueError> {
        if self.teams.iter().any(|t| t.name() == team.name()) {
            return Err(LeagueError::DuplicateTeamName(team.name().to_string()));
        }
        self.teams.push(team);
        Ok(())
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Chronological, append-only log of result lines.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Run the full round robin: every pairing is scheduled and recorded in
    /// order. A failure on one match is logged and reported; the remaining
    /// pairings still run.
    ///
    /// With `verbose` set, fixtures and results are announced on stdout as
    /// they happen, the way the interactive menu expects.
    pub fn run_round_robin(
        &mut self,
        scores: &mut dyn ScoreSource,
        verbose: bool,
    ) -> Vec<MatchResult> {
        let mut results = Vec::new();

        for (i, j) in round_robin_pairings(self.teams.len()) {
            let mut fixture = Fixture::new(&self.teams[i], &self.teams[j]);
            if verbose {
                println!("\n{}", fixture.announcement());
            }

            // i < j, so splitting at j puts the two teams in disjoint halves.
            let (left, right) = self.teams.split_at_mut(j);
            match fixture.record(
                &mut left[i],
                &mut right[0],
                scores,
                MAX_SCORE,
                &mut self.history,
            ) {
                Ok(result) => {
                    if verbose {
                        let mut lines = result.announcement_lines().into_iter();
                        if let Some(first) = lines.next() {
                            println!("\n{}", first);
                        }
                        for line in lines {
                            println!("{}", line);
                        }
                    }
                    results.push(result);
                }
                Err(err) => {
                    log::warn!("match {} failed to record: {}", fixture.announcement(), err);
                    if verbose {
                        println!("Error recording match scores: {}", err);
                    }
                }
            }
        }

        results
    }

    /// The current champion: strictly greatest win count, ties broken by the
    /// first team in league order. `None` only for an empty league.
    pub fn champion(&self) -> Option<&Team> {
        let mut winner = self.teams.first()?;
        for team in &self.teams[1..] {
            if team.wins() > winner.wins() {
                winner = team;
            }
        }
        Some(winner)
    }
}

#[cfg(test)]
#[path = "league_tests.rs"]
mod league_tests;
