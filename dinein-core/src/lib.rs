pub mod config;
pub mod dataset;
pub mod dates;
pub mod day;
pub mod error;
pub mod finder;
pub mod parse_days;
pub mod parse_time;
pub mod render;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use config::{Config, InvalidEntryPolicy};
pub use dataset::RawSchedule;
pub use dates::weekday_of;
pub use day::Day;
pub use error::ScheduleError;
pub use finder::{OpenRestaurants, RestaurantFinder, SkippedEntry, find_open_restaurants, query};
pub use parse_days::resolve_days;
pub use parse_time::normalize_time;
pub use schedule::{NormalizedInterval, QueryPoint, normalize_schedule};
