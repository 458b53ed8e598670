use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A location in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One positioned note. Child order is significant: it fixes sibling
/// left-to-right layout order and connector enumeration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub position: Point,
    #[serde(default)]
    pub children: Vec<String>,
    /// When set, the note itself stays visible but its whole subtree is hidden.
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub selected: bool,
}

impl Note {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("duplicate note id {id}")]
    DuplicateId { id: String },
    #[error("note {id} lists itself as a child")]
    SelfChild { id: String },
    #[error("note {child} is listed under two parents ({first} and {second})")]
    MultipleParents {
        child: String,
        first: String,
        second: String,
    },
}

/// Id-addressed arena of notes, the single source of truth for the board.
///
/// Iteration follows `BTreeMap` key order, which makes root enumeration (and
/// therefore visible-sequence and layout order) deterministic. Every mutating
/// operation is replace-on-write: it clones the store, rewrites the clone and
/// hands it back as the next committed snapshot.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct NoteStore {
    notes: BTreeMap<String, Note>,
}

impl NoteStore {
    /// Builds a store, rejecting anything that is not forest-shaped: duplicate
    /// ids, self-children, and ids with in-degree above one. Child ids with no
    /// matching note are tolerated; traversals treat them as absent.
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Result<Self, BoardError> {
        let mut map = BTreeMap::new();
        for note in notes {
            if note.children.iter().any(|child| *child == note.id) {
                return Err(BoardError::SelfChild { id: note.id });
            }
            let id = note.id.clone();
            if map.insert(id.clone(), note).is_some() {
                return Err(BoardError::DuplicateId { id });
            }
        }
        let store = Self { notes: map };
        store.check_in_degrees()?;
        Ok(store)
    }

    fn check_in_degrees(&self) -> Result<(), BoardError> {
        let mut parents: BTreeMap<&str, &str> = BTreeMap::new();
        for note in self.notes.values() {
            for child in &note.children {
                if !self.notes.contains_key(child) {
                    continue;
                }
                if let Some(first) = parents.insert(child.as_str(), note.id.as_str()) {
                    return Err(BoardError::MultipleParents {
                        child: child.clone(),
                        first: first.to_string(),
                        second: note.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Note> {
        self.notes.get_mut(id)
    }

    /// All notes in key order.
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    /// Parent is a derived relation, not a stored one: scan every children
    /// list for membership.
    pub fn parent_of(&self, id: &str) -> Option<&Note> {
        self.notes
            .values()
            .find(|note| note.children.iter().any(|child| child == id))
    }

    /// Roots in iteration order: ids that appear in no other note's children.
    pub fn roots(&self) -> Vec<&Note> {
        self.notes
            .values()
            .filter(|note| self.parent_of(&note.id).is_none())
            .collect()
    }

    /// Snapshot with one note moved. Unknown ids leave the board unchanged.
    pub fn with_position(&self, id: &str, position: Point) -> Self {
        let mut next = self.clone();
        if let Some(note) = next.notes.get_mut(id) {
            note.position = position;
        }
        next
    }

    /// Snapshot with one note's collapse flag flipped.
    pub fn with_collapse_toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        if let Some(note) = next.notes.get_mut(id) {
            note.collapsed = !note.collapsed;
        }
        next
    }
}
