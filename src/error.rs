use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Roster data errors
    #[error("Malformed height for {player}: '{height}' (expected two leading digits, e.g. \"42 inches\")")]
    MalformedHeight { player: String, height: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Cannot compute statistics for team '{team}': the roster is empty")]
    EmptyRoster { team: String },

    #[error("No team matches selection '{selection}'")]
    TeamNotFound { selection: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a malformed height error for the given player
    pub fn malformed_height(player: impl Into<String>, height: impl Into<String>) -> Self {
        Self::MalformedHeight {
            player: player.into(),
            height: height.into(),
        }
    }

    /// Create an empty roster error
    pub fn empty_roster(team: impl Into<String>) -> Self {
        Self::EmptyRoster { team: team.into() }
    }

    /// Create a team lookup error
    pub fn team_not_found(selection: impl Into<String>) -> Self {
        Self::TeamNotFound {
            selection: selection.into(),
        }
    }

    /// Check if error was caused by the league data itself rather than the environment.
    /// These are deterministic and never go away on retry.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            AppError::MalformedHeight { .. }
                | AppError::Configuration(_)
                | AppError::EmptyRoster { .. }
        )
    }
}
