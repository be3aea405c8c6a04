use crate::constants::{LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use crate::roster::League;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// League file with teams and players. The built-in league is used when not specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster_file: Option<String>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file yields the default configuration.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `HOOPS_LOG_FILE` - Override log file path
    /// - `HOOPS_ROSTER_FILE` - Override league file
    pub async fn load() -> Result<Self, AppError> {
        let mut config = Self::load_stored().await?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads the config file exactly as stored: no env overrides and no
    /// validation. A missing config file yields the default configuration.
    ///
    /// Config commands edit this view so that temporary env values are never
    /// written back and a stale entry can still be cleared.
    pub async fn load_stored() -> Result<Self, AppError> {
        let config_path = get_config_path();

        if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await
        } else {
            Ok(Config::default())
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(roster_file) = std::env::var(env_vars::ROSTER_FILE) {
            self.roster_file = Some(roster_file);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.log_file_path, &self.roster_file)
    }

    /// Resolves the league to play with.
    ///
    /// An explicit `override_path` wins over the configured roster file; with
    /// neither set the built-in league is returned.
    pub async fn league(&self, override_path: Option<&str>) -> Result<League, AppError> {
        match override_path.or(self.roster_file.as_deref()) {
            Some(path) => League::load_from_path(path).await,
            None => {
                tracing::debug!("Using built-in league");
                Ok(League::builtin())
            }
        }
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("Using the built-in league and default log location.");
            return Ok(());
        }

        let config = Config::load_stored().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Roster File:");
        match &config.roster_file {
            Some(roster_file) if Path::new(roster_file).is_file() => println!("{roster_file}"),
            Some(roster_file) => {
                println!("{roster_file}");
                println!("(Missing - run with --clear-roster-file or --set-roster-file)");
            }
            None => println!("(Built-in league)"),
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Configuration` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
