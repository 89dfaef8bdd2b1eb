//! Batch configuration: where maps come from, where they go, and which ones.

use std::path::PathBuf;
use std::str::FromStr;

/// Directory holding the MZ project's `data/` export.
pub const DEFAULT_SOURCE_DIR: &str = "../endgame-of-sre-rpgmaker-mz/data";
/// Where the game engine loads simplified maps from.
pub const DEFAULT_DESTINATION_DIR: &str = "assets/data/maps";

/// Built-in conversions: the hub town and the Team Marathon interior.
pub const DEFAULT_PAIRS: &[(&str, &str)] = &[
    ("Map002.json", "town_of_endgame.json"),
    ("Map004.json", "team_marathon.json"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapPair {
    pub source: String,
    pub destination: String,
}

impl MapPair {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// `SRC=DST`, both sides non-empty.
impl FromStr for MapPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (source, destination) = s
            .split_once('=')
            .ok_or_else(|| format!("expected SRC=DST, got `{s}`"))?;
        let (source, destination) = (source.trim(), destination.trim());
        if source.is_empty() || destination.is_empty() {
            return Err(format!("both sides of `{s}` must be non-empty"));
        }
        Ok(Self::new(source, destination))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub pairs: Vec<MapPair>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: DEFAULT_SOURCE_DIR.into(),
            destination_dir: DEFAULT_DESTINATION_DIR.into(),
            pairs: DEFAULT_PAIRS
                .iter()
                .map(|(src, dst)| MapPair::new(*src, *dst))
                .collect(),
        }
    }
}

impl Config {
    pub fn source_path(&self, pair: &MapPair) -> PathBuf {
        self.source_dir.join(&pair.source)
    }

    pub fn destination_path(&self, pair: &MapPair) -> PathBuf {
        self.destination_dir.join(&pair.destination)
    }
}

/// Knobs that change how the driver reacts to failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Record a failing map and move on instead of aborting the batch.
    pub keep_going: bool,
}
