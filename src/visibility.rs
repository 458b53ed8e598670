use std::collections::HashSet;

use serde::Serialize;

use crate::config::BoardConfig;
use crate::store::{Note, NoteStore, Point};

/// A renderable parent-to-child edge in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connector {
    pub start: Point,
    pub end: Point,
}

/// Which side of a note box a connector attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Right-hand edge of the parent box, inset from the top.
    Outgoing,
    /// Left-hand edge of the child box, inset from the top.
    Incoming,
}

/// Anchor location on a note box. Shared rendering contract: the offsets must
/// stay consistent with the box width the renderer actually draws.
pub fn connection_point(note: &Note, anchor: Anchor, config: &BoardConfig) -> Point {
    let x = match anchor {
        Anchor::Outgoing => note.position.x + config.note_width - config.anchor_inset,
        Anchor::Incoming => note.position.x + config.anchor_inset,
    };
    Point::new(x, note.position.y + config.anchor_inset)
}

/// Pre-order visible sequence: roots in store iteration order, each followed
/// by its visible descendants. A collapsed note is itself still visible; the
/// traversal just never descends into it. A visited set keeps each note to a
/// single appearance even on malformed input.
pub fn visible_notes(store: &NoteStore) -> Vec<&Note> {
    let mut visible = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for root in store.roots() {
        push_visible(store, &root.id, &mut visible, &mut seen);
    }
    visible
}

fn push_visible<'a>(
    store: &'a NoteStore,
    id: &str,
    out: &mut Vec<&'a Note>,
    seen: &mut HashSet<&'a str>,
) {
    let Some(note) = store.get(id) else {
        return;
    };
    if !seen.insert(note.id.as_str()) {
        return;
    }
    out.push(note);
    if !note.collapsed {
        for child in &note.children {
            push_visible(store, child, out, seen);
        }
    }
}

/// True when every strict ancestor of `id` is expanded. The note's own
/// collapse flag is deliberately not consulted: a collapsed child still
/// receives the connector coming down from its open parent.
pub fn ancestors_open(store: &NoteStore, id: &str) -> bool {
    let mut current = store.parent_of(id);
    while let Some(parent) = current {
        if parent.collapsed {
            return false;
        }
        current = store.parent_of(&parent.id);
    }
    true
}

/// Connector pairs for every visible, non-collapsed parent, in visible-note
/// order and child order. Children whose ancestor chain is interrupted by a
/// collapsed note are skipped, as are dangling child ids.
pub fn connectors(store: &NoteStore, config: &BoardConfig) -> Vec<Connector> {
    let mut pairs = Vec::new();
    for note in visible_notes(store) {
        if note.collapsed {
            continue;
        }
        for child_id in &note.children {
            let Some(child) = store.get(child_id) else {
                continue;
            };
            if !ancestors_open(store, child_id) {
                continue;
            }
            pairs.push(Connector {
                start: connection_point(note, Anchor::Outgoing, config),
                end: connection_point(child, Anchor::Incoming, config),
            });
        }
    }
    pairs
}
