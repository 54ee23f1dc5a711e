use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::{Result, bail};
use dinein_core::RestaurantFinder;

pub fn hours_mode(
    cli: &Cli,
    renderer: &Renderer,
    finder: &RestaurantFinder,
) -> Result<CliModeResult> {
    let Some(name) = &cli.hours else {
        return Ok(CliModeResult::NothingToDo);
    };

    let Some((restaurant, intervals)) = finder.hours_for(name) else {
        bail!(
            "no restaurant called \"{name}\" in {}",
            finder.config.dataset_path.display()
        );
    };

    let intervals = intervals?;
    renderer.print_info(&format!("Opening hours for {}", restaurant.name));
    renderer.print_intervals(&intervals);
    Ok(CliModeResult::Finish)
}
