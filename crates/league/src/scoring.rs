//! Random score generation.
//!
//! The only score source the league ships: uniform draws from the process RNG.
//! Tests swap in scripted sources through the same trait.

use league_core::ScoreSource;
use rand::Rng;

/// Upper bound on a single team's match score.
pub const MAX_SCORE: u8 = 50;

/// Uniform random scores in `0..=max_score` from `thread_rng`.
///
/// No quality requirements apply; a per-process pseudo-random source is all the
/// league needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomScores;

impl RandomScores {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreSource for RandomScores {
    fn score(&mut self, max_score: u8) -> u8 {
        rand::thread_rng().gen_range(0..=max_score)
    }
}
