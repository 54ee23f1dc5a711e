use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// What to do with a dataset entry whose hours cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidEntryPolicy {
    /// Leave the restaurant out, log a warning and report it alongside the results.
    #[default]
    Skip,
    /// Fail the whole query with the entry's error.
    Abort,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file with the restaurants and their opening hours.
    pub dataset_path: PathBuf,
    pub invalid_entry_policy: InvalidEntryPolicy,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    dataset: Option<PathBuf>,
    on_invalid_entry: Option<InvalidEntryPolicy>,
}

impl Config {
    /// Loads config from disk (first XDG path, then native) and applies defaults.
    /// A missing or unreadable config file falls back to the defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            log::warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            dataset_path: file_config
                .dataset
                .unwrap_or_else(Self::default_dataset_path),
            invalid_entry_policy: file_config.on_invalid_entry.unwrap_or_default(),
        }
    }

    /// Default dataset: `{data_dir}/dinein/rest_hours.json`
    /// - macOS:   `~/Library/Application Support/dinein/rest_hours.json`
    /// - Linux:   `$XDG_DATA_HOME/dinein/rest_hours.json` or `~/.local/share/dinein/rest_hours.json`
    /// - Windows: `%APPDATA%\dinein\rest_hours.json`
    fn default_dataset_path() -> PathBuf {
        match BaseDirs::new() {
            Some(base) => base.data_dir().join("dinein").join("rest_hours.json"),
            None => PathBuf::from("./rest_hours.json"),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("dinein")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("dinein").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
