//! Normalized opening hours and the query point they are matched against.

use crate::dates::weekday_of;
use crate::day::{Day, format_days};
use crate::error::Result;
use crate::parse_days::resolve_day_list;
use crate::parse_time::{END_OF_DAY, normalize_time, parse_time_span};
use crate::render::format_hours;
use std::collections::BTreeSet;
use std::fmt;

/// One contiguous block of opening hours on a set of days.
///
/// `open_time <= close_time` always holds: hours that run past midnight are stored as two
/// intervals, see [`normalize_hours`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInterval {
    pub open_time: f64,
    pub close_time: f64,
    pub open_days: BTreeSet<Day>,
}

impl NormalizedInterval {
    /// Whether the interval covers `point`. Both boundaries are inclusive.
    pub fn contains(&self, point: &QueryPoint) -> bool {
        self.open_days.contains(&point.day)
            && self.open_time <= point.time
            && point.time <= self.close_time
    }
}

impl fmt::Display for NormalizedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            format_days(&self.open_days),
            format_hours(self.open_time),
            format_hours(self.close_time)
        )
    }
}

/// A moment to check opening hours against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryPoint {
    pub day: Day,
    pub time: f64,
}

impl QueryPoint {
    /// Builds a query point from a `YYYY-MM-DD` date and a clock time.
    ///
    /// The date is checked first, so a query with both inputs invalid reports the date.
    pub fn parse(date: &str, time: &str) -> Result<Self> {
        let day = weekday_of(date)?;
        let time = normalize_time(time)?;
        Ok(Self { day, time })
    }
}

/// Normalizes a single hours string like `"Mon-Thu, Sun 11 am - 10 pm"`.
///
/// Returns one interval, or two when the hours run past midnight: the evening part
/// capped at `24`, then the early-morning part from `0` on the following days.
///
/// ```
/// # use dinein_core::schedule::normalize_hours;
/// let intervals = normalize_hours("Sun 11 am - 1:30 am").unwrap();
/// assert_eq!(intervals.len(), 2);
/// assert_eq!(intervals[0].to_string(), "sun 11:00 - 24:00");
/// assert_eq!(intervals[1].to_string(), "mon 00:00 - 01:30");
/// ```
pub fn normalize_hours(hours: &str) -> Result<Vec<NormalizedInterval>> {
    let span = parse_time_span(hours)?;
    let crosses_midnight = span.crosses_midnight();

    let close_time = if crosses_midnight || span.close_time == 0.0 {
        END_OF_DAY
    } else {
        span.close_time
    };

    let mut intervals = vec![NormalizedInterval {
        open_time: span.open_time,
        close_time,
        open_days: resolve_day_list(span.day_spec, false)?,
    }];

    if crosses_midnight {
        intervals.push(NormalizedInterval {
            open_time: 0.0,
            close_time: span.close_time,
            open_days: resolve_day_list(span.day_spec, true)?,
        });
    }

    log::debug!("normalized {hours:?} into {intervals:?}");
    Ok(intervals)
}

/// Normalizes every hours string of a restaurant, in order.
pub fn normalize_schedule<S: AsRef<str>>(times: &[S]) -> Result<Vec<NormalizedInterval>> {
    let mut intervals = Vec::with_capacity(times.len());
    for hours in times {
        intervals.extend(normalize_hours(hours.as_ref())?);
    }
    Ok(intervals)
}
