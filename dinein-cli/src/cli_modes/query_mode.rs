use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use chrono::Local;
use dinein_core::{RestaurantFinder, dates::DATE_FORMAT, render::format_open_count};

pub fn query_mode(
    cli: &Cli,
    renderer: &Renderer,
    finder: &RestaurantFinder,
) -> Result<CliModeResult> {
    let now = Local::now();
    let date = match &cli.date {
        Some(date) => date.to_string(),
        None => now.format(DATE_FORMAT).to_string(),
    };
    let time = match &cli.time {
        Some(time) => time.to_string(),
        None => now.format("%H:%M").to_string(),
    };

    let result = finder.find_open(&date, &time)?;

    if cli.count {
        renderer.print_line(&result.restaurants.len().to_string());
    } else if result.restaurants.is_empty() {
        renderer.print_info(&format!("Nothing is open on {date} at {time}"));
    } else {
        renderer.print_info(&format!(
            "{} on {date} at {time}",
            format_open_count(result.restaurants.len())
        ));
        renderer.print_restaurants(&result.restaurants);
    }

    if !result.skipped.is_empty() {
        // stdout carries only the number in count mode
        if cli.count {
            renderer.eprint_skipped(&result.skipped);
        } else {
            renderer.print_skipped(&result.skipped);
        }
    }
    Ok(CliModeResult::Finish)
}
