//! Terminal management for the interactive UI
//!
//! Raw mode, the alternate screen and the cursor are owned here so that the
//! terminal is always restored, even when the session ends with an error.

use crate::error::AppError;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;

const WINDOW_TITLE: &str = "BASKETBALL STATISTICS";

/// Configuration for terminal management operations
#[derive(Debug, Clone, Default)]
pub struct TerminalConfig {
    /// Keep the normal screen and cooked mode so logs and panics stay visible
    pub debug_mode: bool,
}

/// Terminal manager responsible for setup and cleanup operations
#[derive(Debug, Default)]
pub struct TerminalManager {
    config: TerminalConfig,
}

impl TerminalManager {
    pub fn with_config(config: TerminalConfig) -> Self {
        Self { config }
    }

    /// Setup terminal for interactive mode
    /// Returns a handle to stdout that can be used for rendering
    pub fn setup_terminal(&self) -> Result<std::io::Stdout, AppError> {
        let mut stdout = stdout();
        execute!(stdout, SetTitle(WINDOW_TITLE))?;

        if !self.config.debug_mode {
            enable_raw_mode()?;
            execute!(stdout, EnterAlternateScreen, Hide)?;
        }

        Ok(stdout)
    }

    /// Restores the terminal to its original state
    pub fn cleanup_terminal(&self, mut stdout: std::io::Stdout) -> Result<(), AppError> {
        if !self.config.debug_mode {
            disable_raw_mode()?;
            execute!(stdout, Show, LeaveAlternateScreen)?;
        }
        Ok(())
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }
}
