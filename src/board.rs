use crate::config::BoardConfig;
use crate::layout::tidy_layout;
use crate::scene::{Scene, build_scene};
use crate::selection::toggle_selection;
use crate::store::{NoteStore, Point};

/// A discrete user interaction, as reported by the host collaborators.
#[derive(Debug, Clone)]
pub enum BoardEvent {
    /// Pointer released over the board. Raw pointer position and board origin
    /// come from the drag collaborator; if either is missing the drop is
    /// ignored and no position changes.
    Drop {
        id: String,
        pointer: Option<Point>,
        origin: Option<Point>,
        grab_offset: Point,
    },
    /// Collapse/expand one note's subtree.
    ToggleCollapse(String),
    /// Toggle selection on a note and its whole subtree.
    Select(String),
    /// Tidy the whole forest at the configured viewport width.
    Layout,
}

/// Owns the committed store snapshot. Events are applied synchronously, one
/// at a time; each handler runs to completion and commits exactly one new
/// snapshot, so a render between events always sees a consistent board.
#[derive(Debug, Clone)]
pub struct Board {
    store: NoteStore,
    config: BoardConfig,
}

impl Board {
    pub fn new(store: NoteStore, config: BoardConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn apply(&mut self, event: BoardEvent) {
        let next = match event {
            BoardEvent::Drop {
                id,
                pointer,
                origin,
                grab_offset,
            } => {
                let (Some(pointer), Some(origin)) = (pointer, origin) else {
                    return;
                };
                let position = Point::new(
                    pointer.x - origin.x - grab_offset.x,
                    pointer.y - origin.y - grab_offset.y,
                );
                self.store.with_position(&id, position)
            }
            BoardEvent::ToggleCollapse(id) => self.store.with_collapse_toggled(&id),
            BoardEvent::Select(id) => toggle_selection(&self.store, &id),
            BoardEvent::Layout => tidy_layout(&self.store, &self.config),
        };
        self.store = next;
    }

    /// Resolve the current snapshot into boxes and connectors.
    pub fn scene(&self) -> Scene {
        build_scene(&self.store, &self.config)
    }
}
