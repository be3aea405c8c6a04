use crate::cli::Args;
use crate::config::Config;
use crate::config::validation::validate_config;
use crate::error::AppError;
use crate::roster::{League, stats};
use crate::ui::{stats_lines, to_plain_text};
use std::io::Write;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.team.is_some() && args.all {
        return Err(AppError::config_error(
            "Cannot use both --team and --all simultaneously",
        ));
    }
    if args.new_roster_file.is_some() && args.clear_roster_file {
        return Err(AppError::config_error(
            "Cannot set and clear the roster file at the same time",
        ));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot set and clear the log file at the same time",
        ));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Applies --set-roster-file, --clear-roster-file, --set-log-file and
/// --clear-log-file to `config`.
///
/// Only the values being set are validated: a new roster file is checked by
/// loading it, a new log path by preparing its directory. Fields the
/// arguments leave alone are kept as they are, even when stale.
pub async fn apply_config_update(config: &mut Config, args: &Args) -> Result<(), AppError> {
    if let Some(new_roster) = &args.new_roster_file {
        League::load_from_path(new_roster).await?;
        config.roster_file = Some(new_roster.clone());
    } else if args.clear_roster_file {
        config.roster_file = None;
        println!("Roster file cleared. Using the built-in league.");
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        validate_config(&Some(new_log_path.clone()), &None)?;
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    Ok(())
}

/// Handles configuration update commands and saves the result.
///
/// Edits the stored file, not the effective config, so env overrides are
/// never persisted and a missing league file does not wipe other settings.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_stored().await?;
    apply_config_update(&mut config, args).await?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Extra guidance printed when a run fails because of the league data.
pub fn failure_hint(error: &AppError) -> Option<&'static str> {
    error.is_data_error().then_some(
        "Check the league file, or run with --clear-roster-file to use the built-in league.",
    )
}

/// Writes the statistics of one team, selected by 1-based number or name.
pub fn write_team_report<W: Write>(
    out: &mut W,
    league: &League,
    selection: &str,
) -> Result<(), AppError> {
    league.validate()?;
    let teams = league.build_teams()?;
    let roster = teams.select(selection)?;
    let team_stats = stats(roster)?;
    writeln!(out, "{}", to_plain_text(&stats_lines(&team_stats)))?;
    Ok(())
}

/// Writes the statistics of every team. Teams without players are reported
/// as such instead of aborting the listing.
pub fn write_all_reports<W: Write>(out: &mut W, league: &League) -> Result<(), AppError> {
    league.validate()?;
    let teams = league.build_teams()?;

    for (index, roster) in teams.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        match stats(roster) {
            Ok(team_stats) => writeln!(out, "{}", to_plain_text(&stats_lines(&team_stats)))?,
            Err(AppError::EmptyRoster { team }) => {
                tracing::warn!("Team {team} has no players");
                writeln!(out, "The displayed stats are for the {team}")?;
                writeln!(out)?;
                writeln!(out, "This team has no players yet.")?;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
