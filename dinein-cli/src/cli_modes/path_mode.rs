use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use dinein_core::Config;

pub fn path_mode(cli: &Cli, renderer: &Renderer, config: &Config) -> Result<CliModeResult> {
    if !cli.path {
        return Ok(CliModeResult::NothingToDo);
    }
    renderer.print_line(&config.dataset_path.display().to_string());
    Ok(CliModeResult::Finish)
}
