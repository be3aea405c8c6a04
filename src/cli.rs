use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --team or --all is set (print statistics and exit)
/// - config operations are requested
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.team.is_some() || args.all || is_config_operation(args) || args.list_config
}

/// Whether the arguments ask to change the stored configuration
pub fn is_config_operation(args: &Args) -> bool {
    args.new_roster_file.is_some()
        || args.clear_roster_file
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Basketball Statistics Tool
///
/// Splits the league roster into teams with an even share of experienced and
/// inexperienced players, then shows each team's statistics.
///
/// In interactive mode (default):
/// - Press 1 to pick a team, 2 or 'q' to quit
/// - Pick a team by its number to see its statistics
/// - Ctrl+C asks for confirmation before quitting
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show statistics for one team (number or name) and exit.
    #[arg(short, long, help_heading = "Display Options", conflicts_with = "all")]
    pub team: Option<String>,

    /// Show statistics for every team and exit.
    #[arg(short, long, help_heading = "Display Options")]
    pub all: bool,

    /// Use this league file for the current run instead of the configured one.
    #[arg(short = 'r', long = "roster", help_heading = "Display Options")]
    pub roster: Option<String>,

    /// Store a league file in the config so it is used on every run.
    #[arg(long = "set-roster-file", help_heading = "Configuration")]
    pub new_roster_file: Option<String>,

    /// Clear the stored league file and go back to the built-in league.
    #[arg(long = "clear-roster-file", help_heading = "Configuration")]
    pub clear_roster_file: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode which doesn't switch to the alternate screen or raw mode.
    /// Logs are also echoed to stdout in non-interactive runs.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_interactive() {
        let args = Args::parse_from(["hoops_stats"]);
        assert!(!is_noninteractive_mode(&args));
    }

    #[test]
    fn test_team_flag_is_noninteractive() {
        let args = Args::parse_from(["hoops_stats", "--team", "2"]);
        assert_eq!(args.team.as_deref(), Some("2"));
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_config_operations() {
        let args = Args::parse_from(["hoops_stats", "--set-roster-file", "league.toml"]);
        assert!(is_config_operation(&args));
        assert!(is_noninteractive_mode(&args));

        let args = Args::parse_from(["hoops_stats", "--clear-log-file"]);
        assert!(is_config_operation(&args));
    }

    #[test]
    fn test_team_and_all_conflict() {
        let result = Args::try_parse_from(["hoops_stats", "--team", "1", "--all"]);
        assert!(result.is_err());
    }
}
