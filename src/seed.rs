use once_cell::sync::Lazy;

use crate::store::{Note, NoteStore, Point};

// Seed rows: id, title, content, (x, y), children.
type SeedRow = (&'static str, &'static str, &'static str, (f32, f32), &'static [&'static str]);

const SEED: [SeedRow; 16] = [
    ("1", "Project Overview", "Main project goals and objectives", (44.0, 95.0), &["2", "3", "4"]),
    ("2", "Research Phase", "Initial research and analysis", (400.5, 37.0), &["5", "6"]),
    ("3", "Development", "Core development tasks", (408.5, 237.0), &["7", "8"]),
    ("4", "Testing", "Quality assurance and testing", (402.5, 361.0), &["9"]),
    ("5", "Market Analysis", "Study of market trends and competitors", (776.0, 117.0), &[]),
    ("6", "User Research", "Interviews and surveys", (1086.0, 30.0), &[]),
    ("7", "Frontend", "User interface development", (1110.0, 266.0), &[]),
    ("8", "Backend", "Server and database development", (1111.0, 382.0), &[]),
    ("9", "QA Testing", "Quality assurance procedures", (767.0, 373.0), &[]),
    ("note1", "Project Management", "Main project overview and goals", (48.0, 677.0), &["note2", "note3"]),
    ("note2", "Planning Phase", "Initial planning and requirements gathering", (334.0, 723.0), &["note4", "note5"]),
    ("note3", "Development Phase", "Core development work", (441.0, 525.0), &["note6", "note7"]),
    ("note4", "Requirements", "Detailed requirements specification", (646.0, 653.0), &[]),
    ("note5", "Timeline", "Project schedule and milestones", (645.0, 775.0), &[]),
    ("note6", "Frontend", "User interface development", (916.0, 588.0), &[]),
    ("note7", "Backend", "Server and database development", (908.0, 497.0), &[]),
];

static DEMO: Lazy<NoteStore> = Lazy::new(|| {
    let notes = SEED.iter().map(|(id, title, content, (x, y), children)| Note {
        id: (*id).to_string(),
        title: (*title).to_string(),
        content: (*content).to_string(),
        position: Point::new(*x, *y),
        children: children.iter().map(|child| (*child).to_string()).collect(),
        collapsed: false,
        selected: false,
    });
    NoteStore::from_notes(notes).expect("demo seed is a well-formed forest")
});

/// The two-tree demo board the interactive app ships with.
pub fn demo_store() -> NoteStore {
    DEMO.clone()
}
