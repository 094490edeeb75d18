use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a player takes on the mat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Raider,
    Defender,
    AllRounder,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Role::Raider => "RAIDER",
            Role::Defender => "DEFENDER",
            Role::AllRounder => "ALL_ROUNDER",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of a played match, from the home side's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    WinA,
    WinB,
    Tie,
}

impl Outcome {
    pub fn is_tie(self) -> bool {
        self == Outcome::Tie
    }
}

/// Decide a match on raw scores. Equal scores are a tie, no sudden death.
pub fn decide_outcome(score_a: u8, score_b: u8) -> Outcome {
    if score_a > score_b {
        Outcome::WinA
    } else if score_b > score_a {
        Outcome::WinB
    } else {
        Outcome::Tie
    }
}
