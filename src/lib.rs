pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use std::path::Path;

use anyhow::{Context, anyhow};
use clap::Parser;

use crate::config::{Config, MapPair, Options};
use crate::error::ConvertError;
use crate::model::SimplifiedMap;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    let config = args.config();

    println!("Converting RPG Maker maps to clean format...\n");

    let report = convert_all(&config, &args.options())
        .with_context(|| format!("Converting maps from {}", config.source_dir.display()))?;

    println!("Conversion complete!");
    println!("Output files written to: {}", config.destination_dir.display());

    if !report.failed.is_empty() {
        let names: Vec<_> = report.failed.iter().map(|(p, _)| p.source.as_str()).collect();
        return Err(anyhow!(
            "{} of {} maps failed: {}",
            report.failed.len(),
            config.pairs.len(),
            names.join(", ")
        ));
    }

    Ok(())
}

/// Outcome of one batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<MapPair>,
    pub skipped: Vec<MapPair>,
    /// Only populated with `Options::keep_going`.
    pub failed: Vec<(MapPair, ConvertError)>,
}

/// Convert every pair in `config`, in order.
///
/// Missing sources are skipped. Any other failure aborts the batch unless
/// `options.keep_going` is set, in which case it is recorded and the batch
/// moves on.
pub fn convert_all(config: &Config, options: &Options) -> error::Result<BatchReport> {
    let mut report = BatchReport::default();

    for pair in &config.pairs {
        std::fs::create_dir_all(&config.destination_dir)
            .map_err(|e| ConvertError::io(&config.destination_dir, e))?;

        let source = config.source_path(pair);
        let destination = config.destination_path(pair);

        if !source.exists() {
            tracing::warn!(source = %source.display(), "skipping {} (not found)", pair.source);
            report.skipped.push(pair.clone());
            continue;
        }

        match convert_map(&source, &destination) {
            Ok(_) => report.converted.push(pair.clone()),
            Err(ConvertError::SourceNotFound { path }) => {
                tracing::warn!(source = %path.display(), "skipping {} (vanished)", pair.source);
                report.skipped.push(pair.clone());
            }
            Err(e) if options.keep_going => {
                tracing::error!("{e}");
                report.failed.push((pair.clone(), e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

/// Convert one MZ map file into one simplified map file.
pub fn convert_map(source: &Path, destination: &Path) -> error::Result<SimplifiedMap> {
    // 1. ── Parse ──────────────────────────────────────────────────────
    let raw = parser::load(source)?;

    // 2. ── Process ────────────────────────────────────────────────────
    let map = processor::run(&raw, source)?;

    // 3. ── Write outputs ──────────────────────────────────────────────
    writer::json::emit(&map, destination)?;
    println!("{}", writer::summary::render(&map, source, destination));

    Ok(map)
}

