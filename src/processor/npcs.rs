//! Promotes talking map events to NPC records.

use crate::model::{Dialogue, Event, Npc};

use super::dialogue::extract_dialogue;
use super::direction::facing_from_code;

/// Build NPCs from `events`, keeping source order.
///
/// Dropped: `null` slots, events without pages, events whose first page has
/// no sprite, and events whose first page never shows text.
pub fn derive_npcs(events: &[Option<Event>]) -> Vec<Npc> {
    events.iter().flatten().filter_map(to_npc).collect()
}

fn to_npc(event: &Event) -> Option<Npc> {
    let Some(page) = event.pages.first() else {
        tracing::debug!(event = %event.name, "skipping event without pages");
        return None;
    };

    if page.image.character_name.is_empty() {
        tracing::debug!(event = %event.name, "skipping event without sprite");
        return None;
    }

    let extracted = extract_dialogue(&page.list);
    if extracted.lines.is_empty() {
        tracing::debug!(event = %event.name, "skipping event without dialogue");
        return None;
    }

    Some(Npc {
        name: event.name.clone(),
        x: event.x,
        y: event.y,
        sprite: page.image.character_name.clone(),
        facing: facing_from_code(page.image.direction),
        dialogue: Dialogue {
            speaker: event.name.clone(),
            portrait: extracted.portrait,
            lines: extracted.lines,
        },
    })
}
