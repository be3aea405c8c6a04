//! Basketball Statistics Tool Library
//!
//! Splits a league roster into teams with an even share of experienced and
//! inexperienced players and computes per-team statistics.
//!
//! # Examples
//!
//! ```rust
//! use hoops_stats::roster::{League, stats};
//! use hoops_stats::error::AppError;
//!
//! fn main() -> Result<(), AppError> {
//!     let league = League::builtin();
//!     let teams = league.build_teams()?;
//!
//!     for roster in &teams {
//!         let team_stats = stats(roster)?;
//!         println!(
//!             "{}: {} players, average height {:.2} inches",
//!             team_stats.team, team_stats.player_count, team_stats.average_height
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod roster;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use roster::{
    League, NormalizedPlayer, PlayerRecord, TeamRoster, TeamStats, Teams, balance, normalize,
    stats,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
