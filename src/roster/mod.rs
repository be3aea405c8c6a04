//! League roster handling
//!
//! Raw player records come either from the built-in league or from a league
//! TOML file. They are normalized into typed players, balanced into teams and
//! summarized per team:
//!
//! ```text
//! League ──normalize──> Vec<NormalizedPlayer> ──balance──> Teams ──stats──> TeamStats
//! ```

pub mod balancer;
pub mod builtin;
pub mod normalizer;
pub mod stats;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tokio::fs;

pub use balancer::{TeamRoster, Teams, balance};
pub use normalizer::{NormalizedPlayer, normalize, normalize_player, parse_height};
pub use stats::{TeamStats, stats};

/// A player record as it appears in the league data, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    /// Height with a two digit inches prefix, e.g. `"42 inches"`
    pub height: String,
    /// `"YES"` for experienced players
    pub experience: String,
    /// Guardian names joined by `" and "`
    pub guardians: String,
}

impl PlayerRecord {
    pub fn new(
        name: impl Into<String>,
        height: impl Into<String>,
        experience: impl Into<String>,
        guardians: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            height: height.into(),
            experience: experience.into(),
            guardians: guardians.into(),
        }
    }
}

/// The raw roster together with the ordered team names it is split into.
///
/// The team list defines both the team count and the display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub teams: Vec<String>,
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
}

impl League {
    pub fn new(teams: Vec<String>, players: Vec<PlayerRecord>) -> Self {
        Self { teams, players }
    }

    /// The league shipped with the tool: 18 players across Panthers, Bandits and Warriors.
    pub fn builtin() -> Self {
        builtin::league()
    }

    /// Parses a league from TOML text and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let league: League = toml::from_str(content)?;
        league.validate()?;
        Ok(league)
    }

    /// Loads a league file from disk.
    ///
    /// # Errors
    /// * `AppError::Io` - The file cannot be read
    /// * `AppError::TomlDeserialize` - The file is not a valid league document
    /// * `AppError::Configuration` - The team list is unusable
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let league = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded league from {path}: {} players, {} teams",
            league.players.len(),
            league.teams.len()
        );
        Ok(league)
    }

    /// Validates the team list.
    ///
    /// Teams must be non-empty, non-blank and unique. Player data is not
    /// validated here; malformed heights surface when the league is normalized.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.teams.is_empty() {
            return Err(AppError::config_error("League must define at least one team"));
        }

        let mut seen = HashSet::new();
        for team in &self.teams {
            if team.trim().is_empty() {
                return Err(AppError::config_error("Team names cannot be blank"));
            }
            if !seen.insert(team.as_str()) {
                return Err(AppError::config_error(format!(
                    "Duplicate team name '{team}'"
                )));
            }
        }

        Ok(())
    }

    /// Normalizes the raw roster and balances it into the configured teams.
    ///
    /// The raw records are left untouched, so this can be called once per
    /// interactive loop iteration and always yields the same teams.
    pub fn build_teams(&self) -> Result<Teams, AppError> {
        let players = normalize(&self.players)?;
        balance(&players, &self.teams)
    }
}

impl Default for League {
    fn default() -> Self {
        Self::builtin()
    }
}
