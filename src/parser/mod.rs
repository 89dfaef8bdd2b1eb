use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::model::SourceMap;

/// Read and parse one MZ map file from disk.
pub fn load(path: &Path) -> Result<SourceMap> {
    if !path.exists() {
        return Err(ConvertError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let json = std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "source map loaded");

    load_from_json(&json).map_err(|source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the JSON text of an MZ map.
///
/// `width`, `height`, `data`, `displayName` and `events` are required;
/// a missing one is reported by serde as `missing field ...`.
pub fn load_from_json(json: &str) -> serde_json::Result<SourceMap> {
    let map: SourceMap = serde_json::from_str(json)?;
    tracing::debug!(
        name = %map.display_name,
        width = map.width,
        height = map.height,
        events = map.events.len(),
        "source map parsed"
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_map_and_ignores_extra_fields() {
        let json = r#"{
            "autoplayBgm": false,
            "tilesetId": 1,
            "width": 2,
            "height": 1,
            "data": [2050, 1600, 0, 0],
            "displayName": "Test",
            "events": [null, {
                "id": 1,
                "name": "Bob",
                "note": "",
                "x": 1,
                "y": 0,
                "pages": [{
                    "image": {"characterName": "Actor1", "characterIndex": 0, "direction": 6},
                    "list": [
                        {"code": 101, "indent": 0, "parameters": ["Bob_1", 0, 0, 2, ""]},
                        {"code": 401, "indent": 0, "parameters": ["Hi there"]},
                        {"code": 0, "indent": 0, "parameters": []}
                    ]
                }]
            }]
        }"#;

        let map = load_from_json(json).expect("valid map");
        assert_eq!(map.width, 2);
        assert_eq!(map.height, 1);
        assert_eq!(map.data, vec![2050, 1600, 0, 0]);
        assert_eq!(map.display_name, "Test");
        assert!(map.events[0].is_none());

        let bob = map.events[1].as_ref().unwrap();
        assert_eq!(bob.name, "Bob");
        assert_eq!(bob.pages[0].image.character_name, "Actor1");
        assert_eq!(bob.pages[0].image.direction, Some(6));
        assert_eq!(bob.pages[0].list.len(), 3);
    }

    #[test]
    fn missing_top_level_field_is_an_error() {
        for field in ["width", "height", "data", "displayName", "events"] {
            let mut root = serde_json::json!({
                "width": 1,
                "height": 1,
                "data": [0],
                "displayName": "x",
                "events": []
            });
            root.as_object_mut().unwrap().remove(field);

            let err = load_from_json(&root.to_string()).unwrap_err();
            assert!(
                err.to_string().contains(field),
                "error for missing `{field}` was: {err}"
            );
        }
    }

    #[test]
    fn page_without_image_or_list_uses_defaults() {
        let json = r#"{"width":1,"height":1,"data":[0],"displayName":"",
            "events":[{"name":"Sign","x":0,"y":0,"pages":[{}]}]}"#;

        let map = load_from_json(json).unwrap();
        let page = &map.events[0].as_ref().unwrap().pages[0];
        assert_eq!(page.image.character_name, "");
        assert_eq!(page.image.direction, None);
        assert!(page.list.is_empty());
    }

    #[test]
    fn not_json_is_an_error() {
        assert!(load_from_json("this is not a map").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load(Path::new("definitely/not/here/Map999.json")).unwrap_err();
        assert!(matches!(err, ConvertError::SourceNotFound { .. }));
    }
}
