mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use cli::Cli;
use cli_modes::{CliModeResult, hours_mode, path_mode, query_mode, use_color};
use dinein_core::{Config, InvalidEntryPolicy, RestaurantFinder, ScheduleError};
use env_logger::Env;
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::new();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<ScheduleError>().and_then(user_message) {
            Some(message) => {
                eprintln!("{message}");
                ExitCode::from(2)
            }
            None => {
                eprintln!("dinein: could not answer the query: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    let renderer = Renderer::new(RenderOptions {
        use_color: use_color(cli),
    });
    let config = resolve_config(cli)?;

    if let CliModeResult::Finish = path_mode(cli, &renderer, &config)? {
        return Ok(());
    }

    let finder = RestaurantFinder::with_config(config)?;

    if let CliModeResult::Finish = hours_mode(cli, &renderer, &finder)? {
        return Ok(());
    }

    query_mode(cli, &renderer, &finder)?;
    Ok(())
}

/// The config file, with command line flags applied on top.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(dataset) = &cli.dataset {
        config.dataset_path = dataset.clone();
    }
    if cli.strict {
        config.invalid_entry_policy = InvalidEntryPolicy::Abort;
    }
    log::debug!("using {config:?}");
    Ok(config)
}

fn user_message(error: &ScheduleError) -> Option<String> {
    match error {
        ScheduleError::InvalidDate { input } => Some(format!(
            "The date \"{input}\" is not a valid date. Please enter the date as YYYY-MM-DD"
        )),
        ScheduleError::InvalidTime { input } => Some(format!(
            "The time \"{input}\" is not a valid time. Please enter the time as HH:MM am/pm"
        )),
        ScheduleError::InvalidDaySpec { .. } | ScheduleError::ScheduleParse { .. } => None,
    }
}
