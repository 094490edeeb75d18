pub mod error;
pub mod fixture;
pub mod team;
pub mod types;

// Re-export the domain model (not runner-specific)
pub use error::LeagueError;
pub use fixture::*;
pub use team::*;
pub use types::*;

// =============================================================================
// ScoreSource trait — implemented by anything that can produce match scores
// =============================================================================

/// Trait for sources of kabaddi match scores.
///
/// The league itself only needs two numbers per match; where they come from is
/// swappable. Production uses a uniform random source, tests script exact
/// scores to pin down outcomes.
pub trait ScoreSource {
    /// Produce one score in `0..=max_score` inclusive.
    fn score(&mut self, max_score: u8) -> u8;
}
