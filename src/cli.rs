use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, MapPair, Options};

/// Convert RPG Maker MZ maps into the engine's simplified map format.
///
/// With no arguments the built-in map list is converted.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory containing the MZ `MapNNN.json` files
    #[arg(long)]
    pub source_dir: Option<PathBuf>,
    /// Directory the simplified maps are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Map to convert as SRC=DST; repeat to replace the built-in list
    #[arg(long = "map", value_name = "SRC=DST")]
    pub maps: Vec<MapPair>,
    /// Keep converting the remaining maps when one fails
    #[arg(long)]
    pub keep_going: bool,
}

impl Cli {
    /// Built-in configuration with any command-line overrides applied.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(dir) = &self.source_dir {
            config.source_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.destination_dir = dir.clone();
        }
        if !self.maps.is_empty() {
            config.pairs = self.maps.clone();
        }
        config
    }

    pub fn options(&self) -> Options {
        Options {
            keep_going: self.keep_going,
        }
    }
}
