use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// One restaurant as it appears in the dataset: a name and its hours as written,
/// e.g. `["Mon-Thu, Sun 11:30 am - 10 pm", "Fri-Sat 11:30 am - 11 pm"]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSchedule {
    pub name: String,
    pub times: Vec<String>,
}

/// Parses a JSON array of `{ "name": ..., "times": [...] }` records.
pub fn parse_dataset(json: &str) -> Result<Vec<RawSchedule>> {
    Ok(serde_json::from_str::<Vec<RawSchedule>>(json)?)
}

/// Reads and parses a dataset file.
pub fn load_dataset(path: &Path) -> Result<Vec<RawSchedule>> {
    let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let dataset = parse_dataset(&s).with_context(|| format!("parsing {}", path.display()))?;
    log::debug!("loaded {} restaurants from {}", dataset.len(), path.display());
    Ok(dataset)
}
