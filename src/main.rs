// src/main.rs
use clap::Parser;
use hoops_stats::cli::{Args, is_config_operation};
use hoops_stats::commands::{
    failure_hint, handle_config_update_command, handle_list_config_command, validate_args,
    write_all_reports, write_team_report,
};
use hoops_stats::config::Config;
use hoops_stats::constants::messages;
use hoops_stats::error::AppError;
use hoops_stats::logging::setup_logging;
use hoops_stats::ui::run_interactive_ui;
use std::io::stdout;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    validate_args(&args)?;

    // A broken config must not prevent fixing it with the config commands
    let config = Config::load().await;

    let (log_file_path, _guard) = setup_logging(&args, config.as_ref().ok()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = run(&args, config).await;
    if let Err(e) = &result {
        match failure_hint(e) {
            Some(hint) => {
                tracing::warn!("League data rejected: {e}");
                eprintln!("{hint}");
            }
            None => tracing::error!("Exiting with error: {e}"),
        }
    }
    result
}

async fn run(args: &Args, config: Result<Config, AppError>) -> Result<(), AppError> {
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(args) {
        return handle_config_update_command(args).await;
    }

    let league = config?.league(args.roster.as_deref()).await?;

    if let Some(selection) = &args.team {
        return write_team_report(&mut stdout().lock(), &league, selection);
    }

    if args.all {
        return write_all_reports(&mut stdout().lock(), &league);
    }

    run_interactive_ui(&league, args.debug)?;
    println!("\n {}", messages::GOODBYE);
    Ok(())
}
