use std::collections::HashSet;

use crate::config::BoardConfig;
use crate::store::{NoteStore, Point};

/// Recomputes every reachable note's position so the forest reads top-down:
/// levels `level_height` apart, siblings left to right in child order, each
/// level centered within the viewport using one global spacing unit.
///
/// Collapsed notes are placed but their subtrees are neither counted nor
/// moved, so hidden descendants keep their stale positions and reappear where
/// they were. Pure in (store, config): running it twice without intervening
/// mutation yields bit-identical positions.
pub fn tidy_layout(store: &NoteStore, config: &BoardConfig) -> NoteStore {
    let mut next = store.clone();
    let root_ids: Vec<String> = store.roots().iter().map(|note| note.id.clone()).collect();

    let widths = level_widths(store, &root_ids);
    let Some(&max_width) = widths.iter().max() else {
        return next;
    };

    let max_width = max_width as f32;
    let total_width =
        (config.viewport_width - 2.0 * config.margin).min(max_width * config.min_node_spacing);
    let spacing = total_width / (max_width + 1.0);

    // One slot counter per level, shared across the whole forest: a second
    // root's children continue counting where the first root's stopped, so
    // notes at the same depth under different roots never share a slot.
    let mut next_slot = vec![0usize; widths.len()];
    let mut seen: HashSet<String> = HashSet::new();
    for root in &root_ids {
        place(&mut next, root, 0, &widths, &mut next_slot, spacing, config, &mut seen);
    }
    next
}

/// Count of notes at each depth, with collapsed subtrees contributing only
/// the collapsed note itself.
fn level_widths(store: &NoteStore, roots: &[String]) -> Vec<usize> {
    let mut widths = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for root in roots {
        count_level(store, root, 0, &mut widths, &mut seen);
    }
    widths
}

fn count_level<'a>(
    store: &'a NoteStore,
    id: &str,
    level: usize,
    widths: &mut Vec<usize>,
    seen: &mut HashSet<&'a str>,
) {
    let Some(note) = store.get(id) else {
        return;
    };
    if !seen.insert(note.id.as_str()) {
        return;
    }
    if widths.len() <= level {
        widths.resize(level + 1, 0);
    }
    widths[level] += 1;
    if !note.collapsed {
        for child in &note.children {
            count_level(store, child, level + 1, widths, seen);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn place(
    store: &mut NoteStore,
    id: &str,
    level: usize,
    widths: &[usize],
    next_slot: &mut [usize],
    spacing: f32,
    config: &BoardConfig,
    seen: &mut HashSet<String>,
) {
    if store.get(id).is_none() || !seen.insert(id.to_string()) {
        return;
    }
    // Every placeable note was counted by `level_widths`, so `level` is in
    // range; the guards keep malformed input from panicking regardless.
    let level_width = widths.get(level).copied().unwrap_or(0) as f32;
    let Some(counter) = next_slot.get_mut(level) else {
        return;
    };
    let slot = *counter;
    *counter += 1;

    let level_start_x = (config.viewport_width - level_width * spacing) / 2.0;
    let position = Point::new(
        level_start_x + slot as f32 * spacing,
        config.margin + level as f32 * config.level_height,
    );

    let (children, collapsed) = match store.get_mut(id) {
        Some(note) => {
            note.position = position;
            (note.children.clone(), note.collapsed)
        }
        None => return,
    };

    if !collapsed {
        for child in &children {
            place(store, child, level + 1, widths, next_slot, spacing, config, seen);
        }
    }
}
