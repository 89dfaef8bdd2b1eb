//! Human-readable progress lines printed after each converted map.

use std::fmt::Write;
use std::path::Path;

use crate::model::SimplifiedMap;

/// Render the per-map report, e.g.
///
/// ```text
/// ✓ Converted Map002.json
///   → assets/data/maps/town_of_endgame.json
///   Map: Town of Endgame (40x30)
///   NPCs: 2
///     - Mayor at (12, 8) - 3 lines
///     - Guard at (20, 5) - 1 lines
/// ```
pub fn render(map: &SimplifiedMap, source: &Path, destination: &Path) -> String {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| source.to_string_lossy());

    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "✓ Converted {file_name}");
    let _ = writeln!(out, "  → {}", destination.display());
    let _ = writeln!(out, "  Map: {} ({}x{})", map.name, map.width, map.height);
    let _ = writeln!(out, "  NPCs: {}", map.npcs.len());
    for npc in &map.npcs {
        let _ = writeln!(
            out,
            "    - {} at ({}, {}) - {} lines",
            npc.name,
            npc.x,
            npc.y,
            npc.dialogue.lines.len()
        );
    }
    out
}
