use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::render::ColorMode;

/// dinein: which restaurants are open right now?
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("query_mode").args(["date", "time", "count"]).multiple(true)),
    group(ArgGroup::new("solo").args(["path", "hours"]).conflicts_with("query_mode")),
)]
pub struct Cli {
    /// Day to check, as YYYY-MM-DD. Defaults to today.
    #[arg(long, short)]
    pub date: Option<String>,
    /// Time to check (e.g., `10:30 pm`, `4 am`, `22:30`). Defaults to now.
    #[arg(long, short)]
    pub time: Option<String>,
    /// Restaurant dataset to read instead of the configured one.
    #[arg(long, env = "DINEIN_DATASET")]
    pub dataset: Option<PathBuf>,
    /// Fail on the first restaurant whose hours cannot be parsed, instead of skipping it.
    #[arg(long)]
    pub strict: bool,
    /// Prints the opening hours of one restaurant (e.g., `dinein --hours "Seoul 116"`).
    #[arg(long)]
    pub hours: Option<String>,
    /// Prints the dataset path.
    #[arg(long, short)]
    pub path: bool,
    /// Prints only the number of open restaurants.
    #[arg(long, short)]
    pub count: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}
