//! League setup configuration.
//!
//! The rosters are explicit data handed to the league, either parsed from a
//! TOML file or taken from the built-in league. Validation happens when the
//! league is built, not here.

use league_core::{LeagueError, Role};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A full league setup: every team and its roster, in league order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    pub teams: Vec<TeamConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    pub players: Vec<PlayerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub role: Role,
}

impl LeagueConfig {
    /// Parse a league setup from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, LeagueError> {
        toml::from_str(text).map_err(|e| LeagueError::Config(e.to_string()))
    }

    /// Load a league setup from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LeagueError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| LeagueError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// The built-in four-team league, used when no config file is given.
    pub fn default_league() -> Self {
        fn team(name: &str, players: &[(&str, Role)]) -> TeamConfig {
            TeamConfig {
                name: name.to_string(),
                players: players
                    .iter()
                    .map(|(player, role)| PlayerConfig {
                        name: player.to_string(),
                        role: *role,
                    })
                    .collect(),
            }
        }

        use Role::*;
        Self {
            teams: vec![
                team(
                    "Dabang Delhi",
                    &[
                        ("Ajay Thakur", Raider),
                        ("Manjeet Chhillar", AllRounder),
                        ("Surender Nada", Defender),
                        ("Nilesh Salunke", Raider),
                        ("Ravinder Pahal", Defender),
                        ("Joginder Narwal", Defender),
                        ("Mohit Chhillar", AllRounder),
                    ],
                ),
                team(
                    "U Mumba",
                    &[
                        ("Fazal Atrachali", Defender),
                        ("Sandeep Narwal", AllRounder),
                        ("Pawan Sehrawat", Raider),
                        ("Surender Singh", AllRounder),
                        ("Rohit Baliyan", Raider),
                        ("Shrikant Jadhav", Raider),
                        ("Dinesh Kumar", Defender),
                    ],
                ),
                team(
                    "Patna Pirates",
                    &[
                        ("Pardeep Narwal", Raider),
                        ("Maninder Singh", AllRounder),
                        ("Neeraj Kumar", Defender),
                        ("Jang Kun Lee", Raider),
                        ("Rohit Gulia", Raider),
                        ("Rinku Narwal", Defender),
                        ("Rajesh Narwal", AllRounder),
                    ],
                ),
                team(
                    "Bengal Warriors",
                    &[
                        ("Deepak Hooda", AllRounder),
                        ("K. Prapanjan", Raider),
                        ("Maninder Singh", AllRounder),
                        ("Baldev Singh", Defender),
                        ("Vinod Kumar", Raider),
                        ("Ran Singh", AllRounder),
                        ("B. Ajay Kumar", Defender),
                    ],
                ),
            ],
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
