//! Teams and players.
//!
//! A `Team` exclusively owns its players. Players are plain immutable data;
//! the only mutations a team sees after roster setup are win increments.

use serde::{Deserialize, Serialize};

use crate::error::LeagueError;
use crate::types::Role;

/// Kabaddi fields exactly seven players per side.
pub const REQUIRED_TEAM_SIZE: u8 = 7;

/// A player on a team roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub role: Role,
}

impl Player {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

/// A team in the league: fixed size, ordered roster, win counter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Team {
    name: String,
    size: u8,
    wins: u32,
    players: Vec<Player>,
}

impl Team {
    /// Create a team. The declared size is a hard precondition: anything other
    /// than [`REQUIRED_TEAM_SIZE`] fails construction outright.
    pub fn new(name: impl Into<String>, size: u8) -> Result<Self, LeagueError> {
        if size != REQUIRED_TEAM_SIZE {
            return Err(LeagueError::InvalidTeamSize {
                expected: REQUIRED_TEAM_SIZE,
                found: size.into(),
            });
        }
        Ok(Self {
            name: name.into(),
            size,
            wins: 0,
            players: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Append a player to the roster. Insertion order is display order.
    /// Duplicate player names are permitted.
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Credit the team with a won match.
    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    /// Render the team's info block, one line per entry, for the CLI to print.
    pub fn info_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Team Name: {}", self.name),
            format!("Team Size: {}", self.size),
            format!("Wins: {}", self.wins),
            "Players:".to_string(),
        ];
        for player in &self.players {
            lines.push(format!("  - {} | Role: {}", player.name, player.role));
        }
        lines
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
