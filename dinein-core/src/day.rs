use chrono::Weekday;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A day of the week, in canonical Monday-first order.
///
/// Parsing is case-insensitive on the three-letter abbreviation (`"Mon"`, `"MON"`, `"mon"`),
/// while `as_ref()`/`to_string()` always give the canonical lowercase form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    AsRefStr,
    Display,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// Position in the canonical week (`mon` = 0 ... `sun` = 6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The day at `index`, wrapping modulo 7.
    pub fn from_index(index: usize) -> Day {
        match index % 7 {
            0 => Day::Mon,
            1 => Day::Tue,
            2 => Day::Wed,
            3 => Day::Thu,
            4 => Day::Fri,
            5 => Day::Sat,
            _ => Day::Sun,
        }
    }

    /// The following calendar day (`sun` rolls over to `mon`).
    pub fn succ(self) -> Day {
        Day::from_index(self.index() + 1)
    }

    /// Parses a day abbreviation, ignoring case and surrounding whitespace.
    pub fn from_token(token: &str) -> Option<Day> {
        token.trim().parse::<Day>().ok()
    }

    /// Every day from `self` to `end` inclusive, walking forward through the week.
    ///
    /// When `end` comes before `self` in canonical order the walk wraps past Sunday,
    /// so `Fri.through(Mon)` is `fri, sat, sun, mon`.
    pub fn through(self, end: Day) -> BTreeSet<Day> {
        let len = (end.index() + 7 - self.index()) % 7 + 1;
        Day::iter()
            .chain(Day::iter())
            .skip(self.index())
            .take(len)
            .collect()
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::from_index(weekday.num_days_from_monday() as usize)
    }
}

/// Joins a day set into `"mon, tue, wed"` form.
pub fn format_days(days: &BTreeSet<Day>) -> String {
    days.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(days: &[Day]) -> BTreeSet<Day> {
        days.iter().copied().collect()
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Day::from_token("Mon"), Some(Day::Mon));
        assert_eq!(Day::from_token("SUN"), Some(Day::Sun));
        assert_eq!(Day::from_token("  thu "), Some(Day::Thu));
        assert_eq!(Day::from_token("monday"), None);
        assert_eq!(Day::from_token(""), None);
    }

    #[test]
    fn renders_canonical_lowercase() {
        assert_eq!(Day::Wed.as_ref(), "wed");
        assert_eq!(Day::Sat.to_string(), "sat");
    }

    #[test]
    fn succ_rolls_over_sunday() {
        assert_eq!(Day::Mon.succ(), Day::Tue);
        assert_eq!(Day::Sun.succ(), Day::Mon);
    }

    #[test]
    fn through_is_inclusive() {
        assert_eq!(
            Day::Mon.through(Day::Thu),
            set(&[Day::Mon, Day::Tue, Day::Wed, Day::Thu])
        );
        assert_eq!(Day::Sat.through(Day::Sat), set(&[Day::Sat]));
    }

    #[test]
    fn through_wraps_past_sunday() {
        assert_eq!(
            Day::Fri.through(Day::Mon),
            set(&[Day::Fri, Day::Sat, Day::Sun, Day::Mon])
        );
        assert_eq!(Day::Tue.through(Day::Mon).len(), 7);
    }

    #[test]
    fn from_chrono_weekday() {
        assert_eq!(Day::from(Weekday::Mon), Day::Mon);
        assert_eq!(Day::from(Weekday::Sun), Day::Sun);
    }

    #[test]
    fn format_days_in_week_order() {
        let days = set(&[Day::Sun, Day::Mon, Day::Wed]);
        assert_eq!(format_days(&days), "mon, wed, sun");
    }
}
