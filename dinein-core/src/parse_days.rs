use crate::day::Day;
use crate::error::{Result, ScheduleError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// A day name, optionally followed by `-` and a second day name, and nothing else.
static DAY_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)(?:\s*-\s*([A-Za-z]+))?\s*$").unwrap());

/// Resolves a single day token (`"Sun"`) or day range (`"Mon-Thu"`) into the set of days
/// it covers.
///
/// Ranges walk forward through the week and wrap past Sunday, so `"Fri-Mon"` covers
/// `fri, sat, sun, mon`.
///
/// With `crosses_midnight` set, every day is moved forward by one first. This is the day
/// set for the early-morning half of hours that run past midnight: `"Mon-Thu"` becomes
/// `tue..fri` and `"Sun"` becomes `mon`.
///
/// # Errors
///
/// [`ScheduleError::InvalidDaySpec`] if the token is not a single day or a two-endpoint
/// range, or either endpoint is not one of the seven abbreviations.
///
/// # Examples
///
/// ```
/// # use dinein_core::day::Day;
/// # use dinein_core::parse_days::resolve_days;
/// let days = resolve_days("Mon-Thu", true).unwrap();
/// assert_eq!(days.into_iter().collect::<Vec<_>>(), vec![Day::Tue, Day::Wed, Day::Thu, Day::Fri]);
/// ```
pub fn resolve_days(token: &str, crosses_midnight: bool) -> Result<BTreeSet<Day>> {
    let invalid = || ScheduleError::InvalidDaySpec {
        input: token.to_string(),
    };

    let caps = DAY_RANGE.captures(token.trim()).ok_or_else(invalid)?;
    let start = Day::from_token(&caps[1]).ok_or_else(invalid)?;
    let end = match caps.get(2) {
        Some(m) => Day::from_token(m.as_str()).ok_or_else(invalid)?,
        None => start,
    };

    let days = if crosses_midnight {
        start.succ().through(end.succ())
    } else {
        start.through(end)
    };
    Ok(days)
}

/// Resolves a comma-separated day specification (`"Mon-Thu, Sun"`) as the union of its
/// pieces.
pub fn resolve_day_list(day_spec: &str, crosses_midnight: bool) -> Result<BTreeSet<Day>> {
    if day_spec.trim().is_empty() {
        return Err(ScheduleError::InvalidDaySpec {
            input: day_spec.to_string(),
        });
    }

    day_spec
        .split(',')
        .try_fold(BTreeSet::new(), |mut days, piece| {
            days.extend(resolve_days(piece, crosses_midnight)?);
            Ok(days)
        })
}
