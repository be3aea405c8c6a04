//! Application-wide constants
//!
//! Literal values shared between the roster core, configuration and the UI.

/// Experience flag value that marks a player as experienced. Anything else is inexperienced.
pub const EXPERIENCED_FLAG: &str = "YES";

/// Separator between guardian names in raw player records
pub const GUARDIAN_SEPARATOR: &str = " and ";

/// Number of leading characters of a raw height that carry the inches value
pub const HEIGHT_DIGITS: usize = 2;

/// Team names of the built-in league, in display order
pub const DEFAULT_TEAMS: [&str; 3] = ["Panthers", "Bandits", "Warriors"];

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "hoops_stats";

/// Default log file name
pub const LOG_FILE_NAME: &str = "hoops_stats.log";

/// Default tracing directive
pub const DEFAULT_LOG_DIRECTIVE: &str = "hoops_stats=info";

/// Environment variable names
pub mod env_vars {
    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "HOOPS_LOG_FILE";

    /// Environment variable for league file override
    pub const ROSTER_FILE: &str = "HOOPS_ROSTER_FILE";
}

/// Text shown by the interactive UI
pub mod messages {
    pub const WRONG_ENTRY: &str = "You made a wrong entry! Please select a valid option";
    pub const PRESS_ENTER: &str = "Press ENTER to continue";
    pub const CONFIRM_QUIT: &str = "Do you really want to quit? (y/n)";
    pub const GOODBYE: &str = "Thanks for using the tool, see you next time!";
}
