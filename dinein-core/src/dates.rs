use crate::day::Day;
use crate::error::{Result, ScheduleError};
use chrono::{Datelike, NaiveDate};

/// The only accepted query date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the day of the week for a `YYYY-MM-DD` date.
///
/// # Errors
///
/// [`ScheduleError::InvalidDate`] for anything that is not a real calendar date, including
/// out-of-range parts (`"2022-01-5000"`) and trailing text (`"2022-01-01type"`).
///
/// # Examples
///
/// ```
/// # use dinein_core::dates::weekday_of;
/// # use dinein_core::day::Day;
/// assert_eq!(weekday_of("2000-01-01").unwrap(), Day::Sat);
/// ```
pub fn weekday_of(date: &str) -> Result<Day> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|d| Day::from(d.weekday()))
        .map_err(|_| ScheduleError::InvalidDate {
            input: date.to_string(),
        })
}
