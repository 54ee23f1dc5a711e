use crate::config::{Config, InvalidEntryPolicy};
use crate::dataset::{RawSchedule, parse_dataset};
use std::path::PathBuf;

const FIXTURE: &str = include_str!("../../../data/rest_hours.json");

/// Test helper to create a default `Config` for testing purposes.
///
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config() -> Config {
    Config {
        dataset_path: PathBuf::from("rest_hours.json"),
        invalid_entry_policy: InvalidEntryPolicy::Skip,
    }
}

/// The restaurants shipped in `data/rest_hours.json`.
pub fn fixture_dataset() -> Vec<RawSchedule> {
    parse_dataset(FIXTURE).expect("fixture parses")
}

pub fn schedule(name: &str, times: &[&str]) -> RawSchedule {
    RawSchedule {
        name: name.to_string(),
        times: times.iter().map(|t| t.to_string()).collect(),
    }
}
