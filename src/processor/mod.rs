//! The functional core: source map in, simplified map out.
pub mod dialogue;
pub mod direction;
pub mod npcs;
pub mod tiles;

use std::path::Path;

use crate::error::Result;
use crate::model::{SimplifiedMap, SourceMap};

/// Runs every processing pass and returns a read-only structure for writers.
///
/// `origin` is only used to label errors.
pub fn run(raw: &SourceMap, origin: &Path) -> Result<SimplifiedMap> {
    let tiles = tiles::layer_zero(raw, origin)?;
    let npcs = npcs::derive_npcs(&raw.events);

    Ok(SimplifiedMap {
        name: raw.display_name.clone(),
        width: raw.width,
        height: raw.height,
        tiles,
        npcs,
    })
}
