//! Layer-0 tile extraction.
//!
//! MZ buckets tile ids by tileset sheet. Ids from 2048 up are autotiles
//! (A1..A4), 1536..2048 is the A5 sheet; everything lower (B..E sheets and
//! the empty tile) has no simplified counterpart and becomes tile 0.

use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::model::SourceMap;

pub const AUTOTILE_BASE: i64 = 2048;
pub const A5_BASE: i64 = 1536;

/// Zero-based index of `tile_id` inside its bucket.
pub fn simplify_tile_id(tile_id: i64) -> u64 {
    if tile_id >= AUTOTILE_BASE {
        (tile_id - AUTOTILE_BASE) as u64
    } else if tile_id >= A5_BASE {
        (tile_id - A5_BASE) as u64
    } else {
        0
    }
}

/// Simplify the first `width * height` ids of `data`; extra layers are dropped.
pub fn layer_zero(map: &SourceMap, origin: &Path) -> Result<Vec<u64>> {
    let malformed = |expected| ConvertError::MalformedMap {
        path: origin.to_path_buf(),
        expected,
        actual: map.data.len(),
    };

    let layer_size = (map.width as usize)
        .checked_mul(map.height as usize)
        .ok_or_else(|| malformed(usize::MAX))?;

    let layer = map.data.get(..layer_size).ok_or_else(|| malformed(layer_size))?;

    Ok(layer.iter().copied().map(simplify_tile_id).collect())
}
