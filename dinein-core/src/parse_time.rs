//! Clock time normalization.
//!
//! Opening hours are compared as a single `f64` of hours since midnight. Minutes are
//! folded in as `minutes / 60` rounded to two decimals, so `"10:30 pm"` becomes `22.5`
//! and `"11:59 pm"` becomes `23.98`.
//!
//! Midnight is the **end** of a day here: `"12 am"`, `"12:00 am"` and `"0:00"` all
//! normalize to `24.0`. A few minutes past midnight (`"12:30 am"`, `"0:13"`) is the start
//! of the next day instead and stays below `1.0`.

use crate::error::{Result, ScheduleError};
use once_cell::sync::Lazy;
use regex::Regex;

/// `H`, `HH:MM` or `HH:MM:SS`, optionally followed by `am`/`pm`. Seconds are accepted and ignored.
static CLOCK_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([0-2]?[0-9])(?::([0-5][0-9]))?(?::[0-5][0-9])?\s*(am|pm)?$").unwrap()
});

/// The time span of an hours string starts at its first digit and runs to the end.
static TIME_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d.*$").unwrap());

/// End-of-day sentinel.
pub const END_OF_DAY: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn from_suffix(suffix: &str) -> Self {
        if suffix.eq_ignore_ascii_case("pm") {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }
}

/// An hours string split into its leading day specification and its normalized times.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSpan<'a> {
    /// Everything before the time span (e.g. `"Mon-Thu, Sun "`).
    pub day_spec: &'a str,
    pub open_time: f64,
    pub close_time: f64,
}

impl TimeSpan<'_> {
    /// `true` when the span closes on the following day (e.g. `11 am - 1:30 am`).
    ///
    /// A close time of exactly `0` never counts as crossing.
    pub fn crosses_midnight(&self) -> bool {
        self.close_time < self.open_time && self.close_time != 0.0
    }
}

/// Converts a clock time string into hours since midnight.
///
/// Accepted forms are `H`, `H:MM` and `H:MM:SS` with an optional `am`/`pm` suffix
/// (case-insensitive, whitespace allowed). Hours above 24 and minutes above 59 are
/// rejected, as is a `pm` time with an hour above 12.
///
/// Hour resolution, in priority order:
/// 1. `12 am` / `12:00 am` is `24` (midnight, end of day).
/// 2. `12:MM am` with nonzero minutes is `0.xx`.
/// 3. `12 pm` / `12:MM pm` is `12`.
/// 4. Any other `pm` hour gets `+ 12`.
/// 5. No suffix, or `am`: the hour as written, except that an exact `0:00` is `24`.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidTime`] carrying the original input.
///
/// # Examples
///
/// ```
/// # use dinein_core::parse_time::normalize_time;
/// assert_eq!(normalize_time("10:30 pm").unwrap(), 22.5);
/// assert_eq!(normalize_time("12 am").unwrap(), 24.0);
/// assert_eq!(normalize_time("12 pm").unwrap(), 12.0);
/// assert!(normalize_time("25:20 pm").is_err());
/// ```
pub fn normalize_time(text: &str) -> Result<f64> {
    let invalid = || ScheduleError::InvalidTime {
        input: text.to_string(),
    };

    let caps = CLOCK_TIME.captures(text.trim()).ok_or_else(invalid)?;
    let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => 0,
    };
    let meridiem = caps.get(3).map(|m| Meridiem::from_suffix(m.as_str()));

    if hour > 24 || minute > 59 {
        return Err(invalid());
    }

    let hours = match (hour, meridiem) {
        (12, Some(Meridiem::Am)) if minute == 0 => 24,
        (12, Some(Meridiem::Am)) => 0,
        (12, Some(Meridiem::Pm)) => 12,
        (h, Some(Meridiem::Pm)) if h > 12 => return Err(invalid()),
        (h, Some(Meridiem::Pm)) => h + 12,
        (0, _) if minute == 0 => 24,
        (h, _) => h,
    };

    Ok(hours as f64 + minutes_as_hours(minute))
}

/// Splits an hours string such as `"Mon-Thu, Sun 10 am - 10:30 pm"` into its day
/// specification and normalized open/close times.
///
/// # Errors
///
/// Returns [`ScheduleError::ScheduleParse`] when there is no time span, when the span is
/// not exactly `<open> - <close>`, or when either side is not a valid clock time.
///
/// # Examples
///
/// ```
/// # use dinein_core::parse_time::parse_time_span;
/// let span = parse_time_span("Mon-Wed 11 am - 8:45 pm").unwrap();
/// assert_eq!(span.day_spec.trim(), "Mon-Wed");
/// assert_eq!(span.open_time, 11.0);
/// assert_eq!(span.close_time, 20.75);
/// ```
pub fn parse_time_span(hours: &str) -> Result<TimeSpan<'_>> {
    let parse_error = |reason: String| ScheduleError::ScheduleParse {
        input: hours.to_string(),
        reason,
    };

    let span = TIME_SPAN
        .find(hours)
        .ok_or_else(|| parse_error("no time span found".to_string()))?;

    let mut sides = span.as_str().split('-');
    let (open, close) = match (sides.next(), sides.next(), sides.next()) {
        (Some(open), Some(close), None) => (open, close),
        _ => {
            return Err(parse_error(format!(
                "expected \"<open> - <close>\", found \"{}\"",
                span.as_str()
            )));
        }
    };

    let open_time = normalize_time(open).map_err(|e| parse_error(e.to_string()))?;
    let close_time = normalize_time(close).map_err(|e| parse_error(e.to_string()))?;

    Ok(TimeSpan {
        day_spec: &hours[..span.start()],
        open_time,
        close_time,
    })
}

/// `minutes / 60`, rounded half-up to two decimals.
fn minutes_as_hours(minute: u32) -> f64 {
    ((minute as f64 / 60.0 + f64::EPSILON) * 100.0).round() / 100.0
}
