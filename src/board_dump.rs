use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::scene::Scene;
use crate::store::NoteStore;

/// Serializable snapshot of a resolved scene, for tooling and debugging.
#[derive(Debug, Serialize)]
pub struct BoardDump {
    pub note_count: usize,
    pub visible: Vec<NoteDump>,
    pub connectors: Vec<ConnectorDump>,
}

#[derive(Debug, Serialize)]
pub struct NoteDump {
    pub id: String,
    pub title: String,
    pub x: f32,
    pub y: f32,
    pub collapsed: bool,
    pub selected: bool,
    pub has_children: bool,
}

#[derive(Debug, Serialize)]
pub struct ConnectorDump {
    pub start: [f32; 2],
    pub end: [f32; 2],
}

impl BoardDump {
    pub fn from_scene(scene: &Scene, store: &NoteStore) -> Self {
        let visible = scene
            .boxes
            .iter()
            .map(|note| NoteDump {
                id: note.id.clone(),
                title: note.title.clone(),
                x: note.position.x,
                y: note.position.y,
                collapsed: note.collapsed,
                selected: note.selected,
                has_children: note.has_children,
            })
            .collect();
        let connectors = scene
            .connectors
            .iter()
            .map(|pair| ConnectorDump {
                start: [pair.start.x, pair.start.y],
                end: [pair.end.x, pair.end.y],
            })
            .collect();
        BoardDump {
            note_count: store.len(),
            visible,
            connectors,
        }
    }
}

pub fn write_board_dump(path: &Path, scene: &Scene, store: &NoteStore) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = BoardDump::from_scene(scene, store);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
