//! The `RestaurantFinder` and the query functions behind it.

use crate::config::{Config, InvalidEntryPolicy};
use crate::dataset::{RawSchedule, load_dataset};
use crate::error::{Result, ScheduleError};
use crate::schedule::{NormalizedInterval, QueryPoint, normalize_schedule};
use anyhow::Context;

/// A dataset entry that was left out of a query because its hours could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    pub restaurant: String,
    pub error: ScheduleError,
}

/// The result of a query: the open restaurants in dataset order, plus any entries that
/// had to be skipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpenRestaurants {
    pub restaurants: Vec<String>,
    pub skipped: Vec<SkippedEntry>,
}

/// Returns the restaurants that are open at `point`, in dataset order.
///
/// Every schedule is normalized from scratch. How an unparsable entry is handled depends
/// on `policy`: [`InvalidEntryPolicy::Abort`] returns its error,
/// [`InvalidEntryPolicy::Skip`] records it in [`OpenRestaurants::skipped`] and carries on.
pub fn find_open_restaurants(
    dataset: &[RawSchedule],
    point: QueryPoint,
    policy: InvalidEntryPolicy,
) -> Result<OpenRestaurants> {
    let mut result = OpenRestaurants::default();

    for restaurant in dataset {
        let intervals = match normalize_schedule(&restaurant.times) {
            Ok(intervals) => intervals,
            Err(error) => match policy {
                InvalidEntryPolicy::Abort => {
                    log::error!("bad hours for '{}': {error}", restaurant.name);
                    return Err(error);
                }
                InvalidEntryPolicy::Skip => {
                    log::warn!("skipping '{}': {error}", restaurant.name);
                    result.skipped.push(SkippedEntry {
                        restaurant: restaurant.name.clone(),
                        error,
                    });
                    continue;
                }
            },
        };

        if intervals.iter().any(|interval| interval.contains(&point)) {
            result.restaurants.push(restaurant.name.clone());
        }
    }

    log::debug!(
        "{} of {} restaurants open on {} at {}",
        result.restaurants.len(),
        dataset.len(),
        point.day,
        point.time
    );
    Ok(result)
}

/// Parses `date` and `time` into a [`QueryPoint`] and runs [`find_open_restaurants`].
///
/// ```
/// # use dinein_core::config::InvalidEntryPolicy;
/// # use dinein_core::dataset::RawSchedule;
/// # use dinein_core::finder::query;
/// let dataset = vec![RawSchedule {
///     name: "Naan 'N' Curry".to_string(),
///     times: vec!["Mon-Sun 11 am - 4 am".to_string()],
/// }];
///
/// let open = query(&dataset, "2000-01-01", "4 am", InvalidEntryPolicy::Abort).unwrap();
/// assert_eq!(open.restaurants, vec!["Naan 'N' Curry"]);
/// ```
pub fn query(
    dataset: &[RawSchedule],
    date: &str,
    time: &str,
    policy: InvalidEntryPolicy,
) -> Result<OpenRestaurants> {
    let point = QueryPoint::parse(date, time)?;
    find_open_restaurants(dataset, point, policy)
}

/// The central struct for answering "what is open?".
///
/// Holds the configuration and the dataset it was loaded from. The dataset is read-only
/// for the lifetime of the finder.
#[derive(Debug)]
pub struct RestaurantFinder {
    pub config: Config,
    pub dataset: Vec<RawSchedule>,
}

impl RestaurantFinder {
    /// Creates a new finder, loading configuration from standard paths.
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new finder with a specific `Config`, loading the dataset it points at.
    pub fn with_config(config: Config) -> anyhow::Result<Self> {
        let dataset = load_dataset(&config.dataset_path)
            .with_context(|| "loading restaurant dataset".to_string())?;
        Ok(Self::with_dataset(config, dataset))
    }

    /// Creates a finder over an already loaded dataset.
    pub fn with_dataset(config: Config, dataset: Vec<RawSchedule>) -> Self {
        Self { config, dataset }
    }

    /// Restaurants open on `date` (`YYYY-MM-DD`) at `time`, using the configured
    /// invalid entry policy.
    pub fn find_open(&self, date: &str, time: &str) -> Result<OpenRestaurants> {
        query(&self.dataset, date, time, self.config.invalid_entry_policy)
    }

    /// The normalized opening hours of the restaurant called `name` (case-insensitive),
    /// or `None` if the dataset has no such restaurant.
    pub fn hours_for(
        &self,
        name: &str,
    ) -> Option<(&RawSchedule, Result<Vec<NormalizedInterval>>)> {
        let name = name.trim();
        self.dataset
            .iter()
            .find(|restaurant| restaurant.name.eq_ignore_ascii_case(name))
            .map(|restaurant| (restaurant, normalize_schedule(&restaurant.times)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::Day;
    use crate::tests::{fixture_dataset, mk_config, schedule};

    fn open_at(date: &str, time: &str) -> Vec<String> {
        query(&fixture_dataset(), date, time, InvalidEntryPolicy::Abort)
            .expect("query ok")
            .restaurants
    }

    #[test]
    fn saturday_noon() {
        let open = open_at("2000-01-01", "12:00 pm");
        assert_eq!(
            open,
            vec![
                "The Cowfish Sushi Burger Bar",
                "Morgan St Food Hall",
                "Beasley's Chicken + Honey",
                "Bida Manda",
                "The Cheesecake Factory",
                "Tupelo Honey",
                "Player's Retreat",
                "Glenwood Grill",
                "Neomonde",
                "Page Road Grill",
                "Mez Mexican",
                "Saltbox",
                "El Rodeo",
                "Naan 'N' Curry",
                "42nd St Oyster Bar",
                "Top of the Hill",
            ]
        );
    }

    #[test]
    fn saturday_four_am_only_the_late_kitchen() {
        assert_eq!(open_at("2000-01-01", "4 am"), vec!["Naan 'N' Curry"]);
    }

    #[test]
    fn saturday_one_am() {
        assert_eq!(
            open_at("2000-01-01", "1 am"),
            vec!["Naan 'N' Curry", "Seoul 116", "Top of the Hill"]
        );
    }

    #[test]
    fn midnight_matches_places_open_until_end_of_day() {
        assert_eq!(
            open_at("2000-01-01", "0"),
            vec![
                "The Cheesecake Factory",
                "Naan 'N' Curry",
                "Seoul 116",
                "42nd St Oyster Bar",
                "Top of the Hill",
            ]
        );
    }

    #[test]
    fn friday_hours_carry_into_sunday_morning() {
        // 2000-01-02 is a Sunday; the Cheesecake Factory's Sat hours run to 12:30 am.
        assert_eq!(
            open_at("2000-01-02", "12:30 am"),
            vec![
                "The Cheesecake Factory",
                "Naan 'N' Curry",
                "Seoul 116",
                "Top of the Hill",
            ]
        );
    }

    #[test]
    fn sunday_hours_carry_into_monday_morning() {
        assert_eq!(
            open_at("2000-01-03", "1:00 am"),
            vec!["Naan 'N' Curry", "Seoul 116", "42nd St Oyster Bar"]
        );
    }

    #[test]
    fn monday_late_morning_with_seconds() {
        let open = open_at("2022-08-15", "11:55:23");
        assert_eq!(open.len(), 17);
        for closed in ["Garland", "Crawford and Son", "Death and Taxes", "Seoul 116"] {
            assert!(!open.iter().any(|name| name == closed), "{closed}");
        }
        assert!(open.iter().any(|name| name == "Caffe Luna"));
    }

    #[test]
    fn invalid_query_inputs_are_user_errors() {
        let dataset = fixture_dataset();
        let err = query(&dataset, "asdfasdfasd", "12:30 pm", InvalidEntryPolicy::Skip)
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidDate {
                input: "asdfasdfasd".to_string()
            }
        );
        assert!(err.is_user_error());

        for time in ["55:96 pm", "25:20 pm"] {
            let err = query(&dataset, "2000-01-01", time, InvalidEntryPolicy::Skip).unwrap_err();
            assert_eq!(
                err,
                ScheduleError::InvalidTime {
                    input: time.to_string()
                }
            );
        }
    }

    fn dataset_with_bad_entry() -> Vec<RawSchedule> {
        vec![
            schedule("El Rodeo", &["Mon-Sun 11 am - 10 pm"]),
            schedule("Closed For Good", &["Someday 11 am - 10 pm"]),
            schedule("Saltbox", &["Mon-Sat 11:30 am - 3 pm"]),
        ]
    }

    #[test]
    fn skip_policy_reports_bad_entries_and_keeps_going() {
        let result = query(
            &dataset_with_bad_entry(),
            "2000-01-01",
            "12 pm",
            InvalidEntryPolicy::Skip,
        )
        .unwrap();

        assert_eq!(result.restaurants, vec!["El Rodeo", "Saltbox"]);
        assert_eq!(
            result.skipped,
            vec![SkippedEntry {
                restaurant: "Closed For Good".to_string(),
                error: ScheduleError::InvalidDaySpec {
                    input: "Someday ".to_string()
                },
            }]
        );
    }

    #[test]
    fn abort_policy_fails_the_whole_query() {
        let err = query(
            &dataset_with_bad_entry(),
            "2000-01-01",
            "12 pm",
            InvalidEntryPolicy::Abort,
        )
        .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidDaySpec { .. }));
        assert!(!err.is_user_error());
    }

    #[test]
    fn empty_dataset_has_nothing_open() {
        let point = QueryPoint {
            day: Day::Sat,
            time: 12.0,
        };
        let result = find_open_restaurants(&[], point, InvalidEntryPolicy::Abort).unwrap();
        assert!(result.restaurants.is_empty());
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn repeated_queries_agree() {
        let finder = RestaurantFinder::with_dataset(mk_config(), fixture_dataset());
        let first = finder.find_open("2000-01-01", "10:45 pm").unwrap();
        let second = finder.find_open("2000-01-01", "10:45 pm").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn finder_uses_configured_policy() {
        let mut config = mk_config();
        config.invalid_entry_policy = InvalidEntryPolicy::Abort;
        let finder = RestaurantFinder::with_dataset(config, dataset_with_bad_entry());
        assert!(finder.find_open("2000-01-01", "12 pm").is_err());
    }

    #[test]
    fn hours_for_finds_by_name_case_insensitively() {
        let finder = RestaurantFinder::with_dataset(mk_config(), fixture_dataset());
        let (restaurant, intervals) = finder.hours_for("naan 'n' curry").unwrap();
        assert_eq!(restaurant.name, "Naan 'N' Curry");

        let lines: Vec<String> = intervals.unwrap().iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "mon, tue, wed, thu, fri, sat, sun 11:00 - 24:00",
                "mon, tue, wed, thu, fri, sat, sun 00:00 - 04:00",
            ]
        );
        assert!(finder.hours_for("Nowhere").is_none());
    }

    #[test]
    fn with_config_loads_the_dataset_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("rest_hours.json");
        std::fs::write(
            &path,
            r#"[{ "name": "Saltbox", "times": ["Mon-Sat 11:30 am - 3 pm"] }]"#,
        )
        .unwrap();

        let mut config = mk_config();
        config.dataset_path = path;
        let finder = RestaurantFinder::with_config(config).unwrap();
        assert_eq!(finder.dataset.len(), 1);

        let mut missing = mk_config();
        missing.dataset_path = tmp.path().join("missing.json");
        assert!(RestaurantFinder::with_config(missing).is_err());
    }
}
