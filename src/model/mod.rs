use serde::{Deserialize, Serialize};

/// Entire map as it comes out of the MZ `MapNNN.json` export.
///
/// Only the fields the converter reads are modelled; everything else in the
/// export (tileset id, bgm, encounter list, ...) is ignored by serde.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    pub width: u32,
    pub height: u32,
    /// Every layer back to back; layer 0 is the first `width * height` ids.
    pub data: Vec<i64>,
    pub display_name: String,
    /// MZ keeps slot 0 (and deleted events) as `null`.
    pub events: Vec<Option<Event>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub image: PageImage,
    #[serde(default)]
    pub list: Vec<Command>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageImage {
    #[serde(default)]
    pub character_name: String,
    #[serde(default)]
    pub direction: Option<i64>,
}

/// One scripted instruction. Parameters are heterogeneous in MZ
/// (strings, numbers, nested arrays) so they stay as raw JSON values.
#[derive(Debug, Clone, Deserialize)]
pub struct Command {
    pub code: i64,
    #[serde(default)]
    pub parameters: Vec<serde_json::Value>,
}

/// ─────────────────────────────────────────────────────
/// Output side
/// ─────────────────────────────────────────────────────

/// Fully processed map handed to `writer`. Field order is the key order
/// of the emitted JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedMap {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<u64>,
    pub npcs: Vec<Npc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub sprite: String,
    pub facing: Facing,
    pub dialogue: Dialogue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialogue {
    pub speaker: String,
    pub portrait: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Down,
    Left,
    Right,
    Up,
}
