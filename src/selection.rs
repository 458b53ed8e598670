use std::collections::HashSet;

use crate::store::NoteStore;

/// Flips `selected` on the target note and every descendant, regardless of
/// collapse state. The flip inverts whatever each flag held before, so
/// applying the toggle twice restores the original selection exactly.
///
/// Runs on a cloned snapshot; the visited set bounds the rewrite to one
/// mutation per note even on malformed input. Dangling ids are skipped.
pub fn toggle_selection(store: &NoteStore, id: &str) -> NoteStore {
    let mut next = store.clone();
    let mut seen: HashSet<String> = HashSet::new();
    flip(&mut next, id, &mut seen);
    next
}

fn flip(store: &mut NoteStore, id: &str, seen: &mut HashSet<String>) {
    if !seen.insert(id.to_string()) {
        return;
    }
    let children = match store.get_mut(id) {
        Some(note) => {
            note.selected = !note.selected;
            note.children.clone()
        }
        None => return,
    };
    for child in &children {
        flip(store, child, seen);
    }
}
