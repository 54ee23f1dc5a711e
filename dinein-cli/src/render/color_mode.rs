use clap::ValueEnum;

/// When to emit ANSI colors.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ColorMode {
    /// Colors on a terminal, unless `NO_COLOR` is set.
    Auto,
    Always,
    Never,
}
