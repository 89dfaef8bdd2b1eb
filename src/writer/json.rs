//! Emit the simplified map as pretty-printed JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::model::SimplifiedMap;

/// Write `map` to `path`, replacing whatever was there.
///
/// Two-space indentation, keys in struct order, non-ASCII text kept as is.
pub fn emit(map: &SimplifiedMap, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut out = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut out, map)
        .map_err(|e| ConvertError::io(path, e.into()))?;
    out.flush().map_err(|e| ConvertError::io(path, e))?;

    tracing::debug!(path = %path.display(), "simplified map written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dialogue, Facing, Npc};

    fn sample() -> SimplifiedMap {
        SimplifiedMap {
            name: "Café".into(),
            width: 1,
            height: 1,
            tiles: vec![7],
            npcs: vec![Npc {
                name: "Ann".into(),
                x: 0,
                y: 0,
                sprite: "People1".into(),
                facing: Facing::Left,
                dialogue: Dialogue {
                    speaker: "Ann".into(),
                    portrait: "".into(),
                    lines: vec!["こんにちは".into()],
                },
            }],
        }
    }

    #[test]
    fn writes_keys_in_order_with_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        emit(&sample(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert!(text.starts_with("{\n  \"name\": \"Café\",\n  \"width\": 1,"));
        assert!(text.contains("\"facing\": \"left\""));
        assert!(text.contains("こんにちは"), "non-ASCII must not be escaped");

        let name_at = text.find("\"name\"").unwrap();
        let tiles_at = text.find("\"tiles\"").unwrap();
        let npcs_at = text.find("\"npcs\"").unwrap();
        assert!(name_at < tiles_at && tiles_at < npcs_at);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "x".repeat(10_000)).unwrap();

        emit(&sample(), &path).unwrap();
        let back: SimplifiedMap =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.json");

        let err = emit(&sample(), &path).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
