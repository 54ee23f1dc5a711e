mod cli_mode;
mod hours_mode;
mod path_mode;
mod query_mode;
mod use_color;

pub use cli_mode::CliModeResult;
pub use hours_mode::hours_mode;
pub use path_mode::path_mode;
pub use query_mode::query_mode;
pub use use_color::use_color;
