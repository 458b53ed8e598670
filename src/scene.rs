use serde::Serialize;

use crate::config::BoardConfig;
use crate::store::{NoteStore, Point};
use crate::visibility::{Connector, connectors, visible_notes};

/// Everything the box renderer needs for one draggable note.
#[derive(Debug, Clone, Serialize)]
pub struct NoteBox {
    pub id: String,
    pub title: String,
    pub content: String,
    pub position: Point,
    pub collapsed: bool,
    pub has_children: bool,
    pub selected: bool,
}

/// One render pass worth of resolved board state. Always derived fresh from
/// the current snapshot, never patched incrementally. Box order is the
/// visible-sequence order and doubles as z-order.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub boxes: Vec<NoteBox>,
    pub connectors: Vec<Connector>,
}

pub fn build_scene(store: &NoteStore, config: &BoardConfig) -> Scene {
    let boxes = visible_notes(store)
        .into_iter()
        .map(|note| NoteBox {
            id: note.id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
            position: note.position,
            collapsed: note.collapsed,
            has_children: note.has_children(),
            selected: note.selected,
        })
        .collect();
    Scene {
        boxes,
        connectors: connectors(store, config),
    }
}
