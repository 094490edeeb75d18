//! League Runner for the kabaddi league demo
//!
//! This crate provides infrastructure for:
//! - Building a league from explicit roster configuration (TOML or built-in)
//! - Running a round-robin season with randomly generated scores
//! - Reporting standings, the champion, and the match history
//!
//! # Usage
//!
//! ```bash
//! # Run the interactive menu with the built-in four-team league
//! cargo run -p league
//!
//! # Run against a custom roster file
//! cargo run -p league -- my_league.toml
//! ```

mod config;
mod league;
mod schedule;
mod scoring;
mod standings;

pub use config::*;
pub use league::*;
pub use schedule::*;
pub use scoring::*;
pub use standings::*;
