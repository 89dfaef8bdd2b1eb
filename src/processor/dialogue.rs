//! Pulls the speaker portrait and text lines out of a page's command list.

use serde_json::Value;

use crate::model::Command;

/// "Show Text" header; its first parameter is the face image name.
pub const SHOW_PORTRAIT: i64 = 101;
/// One line of message text following a `SHOW_PORTRAIT`.
pub const SHOW_TEXT_LINE: i64 = 401;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extracted {
    pub portrait: String,
    pub lines: Vec<String>,
}

/// Scan `commands` in order. The last portrait wins; lines keep their order.
pub fn extract_dialogue(commands: &[Command]) -> Extracted {
    commands.iter().fold(Extracted::default(), |mut acc, cmd| {
        match (cmd.code, first_text(cmd)) {
            (SHOW_PORTRAIT, Some(face)) => acc.portrait = face.to_string(),
            (SHOW_TEXT_LINE, Some(line)) => acc.lines.push(line.to_string()),
            _ => {}
        }
        acc
    })
}

fn first_text(cmd: &Command) -> Option<&str> {
    cmd.parameters.first().and_then(Value::as_str)
}
