use noteboard::board::{Board, BoardEvent};
use noteboard::board_dump::BoardDump;
use noteboard::config::BoardConfig;
use noteboard::layout::tidy_layout;
use noteboard::render::render_svg;
use noteboard::scene::build_scene;
use noteboard::seed::demo_store;
use noteboard::selection::toggle_selection;
use noteboard::store::{Note, NoteStore, Point};
use noteboard::theme::Theme;
use noteboard::visibility::{ancestors_open, connectors, visible_notes};

fn note(id: &str, children: &[&str]) -> Note {
    Note {
        id: id.to_string(),
        title: format!("Note {id}"),
        content: format!("Content of {id}"),
        position: Point::default(),
        children: children.iter().map(|child| child.to_string()).collect(),
        collapsed: false,
        selected: false,
    }
}

fn forest(rows: &[(&str, &[&str])]) -> NoteStore {
    NoteStore::from_notes(rows.iter().map(|(id, children)| note(id, children)))
        .expect("well-formed forest")
}

fn visible_ids(store: &NoteStore) -> Vec<String> {
    visible_notes(store).iter().map(|n| n.id.clone()).collect()
}

#[test]
fn note_is_visible_iff_all_strict_ancestors_are_open() {
    let mut store = forest(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
    assert_eq!(visible_ids(&store), ["a", "b", "c"]);

    store = store.with_collapse_toggled("b");
    assert_eq!(visible_ids(&store), ["a", "b"]);

    store = store.with_collapse_toggled("a");
    assert_eq!(visible_ids(&store), ["a"]);
}

#[test]
fn collapsed_root_stays_visible() {
    let store = forest(&[("a", &["b"]), ("b", &[])]).with_collapse_toggled("a");
    assert_eq!(visible_ids(&store), ["a"]);
}

#[test]
fn visible_sequence_is_preorder_with_roots_in_store_order() {
    let store = forest(&[
        ("1", &["2", "3"]),
        ("2", &["4"]),
        ("3", &[]),
        ("4", &[]),
        ("z", &[]),
    ]);
    assert_eq!(visible_ids(&store), ["1", "2", "4", "3", "z"]);
}

#[test]
fn connector_emitted_only_for_open_parents() {
    let config = BoardConfig::default();
    let store = forest(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
    assert_eq!(connectors(&store, &config).len(), 2);

    // Collapsing b keeps the a->b connector but drops b->c.
    let collapsed = store.with_collapse_toggled("b");
    assert_eq!(connectors(&collapsed, &config).len(), 1);

    // Collapsing the root drops everything.
    let closed = store.with_collapse_toggled("a");
    assert!(connectors(&closed, &config).is_empty());
}

#[test]
fn collapsed_grandparent_suppresses_deep_connectors() {
    let config = BoardConfig::default();
    // d's direct parent c is open, but grandparent b is collapsed: d must be
    // neither visible nor connected.
    let store =
        forest(&[("a", &["b"]), ("b", &["c"]), ("c", &["d"]), ("d", &[])]).with_collapse_toggled("b");
    assert_eq!(visible_ids(&store), ["a", "b"]);
    assert!(!ancestors_open(&store, "d"));
    assert!(ancestors_open(&store, "b"));
    assert_eq!(connectors(&store, &config).len(), 1);
}

#[test]
fn connector_anchors_use_fixed_box_offsets() {
    let config = BoardConfig::default();
    let store = NoteStore::from_notes([
        Note {
            position: Point::new(0.0, 0.0),
            ..note("p", &["c"])
        },
        Note {
            position: Point::new(100.0, 200.0),
            ..note("c", &[])
        },
    ])
    .unwrap();
    let pairs = connectors(&store, &config);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].start, Point::new(240.0, 10.0));
    assert_eq!(pairs[0].end, Point::new(110.0, 210.0));
}

#[test]
fn tidy_layout_matches_worked_example() {
    // Forest {1 -> [2, 3]} at viewport 1000: spacing = min(900, 600)/3 = 200,
    // level 0 starts at 400, level 1 at 300.
    let config = BoardConfig {
        viewport_width: 1000.0,
        ..BoardConfig::default()
    };
    let store = forest(&[("1", &["2", "3"]), ("2", &[]), ("3", &[])]);
    let laid = tidy_layout(&store, &config);

    assert_eq!(laid.get("1").unwrap().position, Point::new(400.0, 50.0));
    assert_eq!(laid.get("2").unwrap().position, Point::new(300.0, 250.0));
    assert_eq!(laid.get("3").unwrap().position, Point::new(500.0, 250.0));
}

#[test]
fn tidy_layout_is_idempotent() {
    let config = BoardConfig::default();
    let once = tidy_layout(&demo_store(), &config);
    let twice = tidy_layout(&once, &config);
    for note in once.notes() {
        let again = twice.get(&note.id).unwrap();
        assert_eq!(note.position.x.to_bits(), again.position.x.to_bits());
        assert_eq!(note.position.y.to_bits(), again.position.y.to_bits());
    }
}

#[test]
fn shared_levels_across_roots_never_collide() {
    // Two roots contribute to the same depth; the slot counter runs across
    // the whole forest, so all three level-1 notes land on distinct columns.
    let config = BoardConfig {
        viewport_width: 1000.0,
        ..BoardConfig::default()
    };
    let store = forest(&[
        ("r1", &["a", "b"]),
        ("a", &[]),
        ("b", &[]),
        ("r2", &["c"]),
        ("c", &[]),
    ]);
    let laid = tidy_layout(&store, &config);

    let mut level1: Vec<f32> = ["a", "b", "c"]
        .iter()
        .map(|id| laid.get(id).unwrap().position.x)
        .collect();
    level1.sort_by(f32::total_cmp);
    assert!(level1.windows(2).all(|pair| pair[0] < pair[1]));
    for id in ["a", "b", "c"] {
        assert_eq!(laid.get(id).unwrap().position.y, 250.0);
    }
}

#[test]
fn tidy_layout_of_empty_store_is_a_noop_snapshot() {
    let config = BoardConfig::default();
    let store = NoteStore::from_notes([]).unwrap();
    let laid = tidy_layout(&store, &config);
    assert!(laid.is_empty());
}

#[test]
fn collapsed_subtrees_keep_stale_positions_through_layout() {
    let config = BoardConfig::default();
    let store = forest(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
    let laid = tidy_layout(&store, &config);
    let stale = laid.get("c").unwrap().position;

    let collapsed = laid.with_collapse_toggled("b");
    let relaid = tidy_layout(&collapsed, &config);
    assert_eq!(relaid.get("c").unwrap().position, stale);

    // Expanding brings c back at its pre-collapse position; no automatic
    // layout recompute happens on expand.
    let expanded = relaid.with_collapse_toggled("b");
    assert_eq!(expanded.get("c").unwrap().position, stale);
    assert_eq!(visible_ids(&expanded), ["a", "b", "c"]);
}

#[test]
fn selection_toggle_flips_subtree_and_double_toggle_restores() {
    let mut store = forest(&[("a", &["b", "c"]), ("b", &["d"]), ("c", &[]), ("d", &[])]);
    // Give the subtree mixed prior states.
    store = toggle_selection(&store, "c");
    assert!(store.get("c").unwrap().selected);

    let once = toggle_selection(&store, "a");
    assert!(once.get("a").unwrap().selected);
    assert!(once.get("b").unwrap().selected);
    assert!(!once.get("c").unwrap().selected);
    assert!(once.get("d").unwrap().selected);

    let twice = toggle_selection(&once, "a");
    for id in ["a", "b", "c", "d"] {
        assert_eq!(
            twice.get(id).unwrap().selected,
            store.get(id).unwrap().selected
        );
    }
}

#[test]
fn selection_ignores_collapse_state() {
    let store = forest(&[("a", &["b"]), ("b", &[])]).with_collapse_toggled("a");
    let toggled = toggle_selection(&store, "a");
    assert!(toggled.get("b").unwrap().selected);
}

#[test]
fn board_events_commit_one_snapshot_each() {
    let mut board = Board::new(demo_store(), BoardConfig::default());

    board.apply(BoardEvent::ToggleCollapse("2".to_string()));
    let scene = board.scene();
    assert!(scene.boxes.iter().any(|b| b.id == "2" && b.collapsed));
    assert!(!scene.boxes.iter().any(|b| b.id == "5"));

    board.apply(BoardEvent::Select("note1".to_string()));
    let scene = board.scene();
    for id in ["note1", "note2", "note3", "note4", "note5", "note6", "note7"] {
        assert!(scene.boxes.iter().any(|b| b.id == id && b.selected));
    }

    board.apply(BoardEvent::Layout);
    let scene = board.scene();
    // Collapsed subtree of "2" stays hidden after layout.
    assert!(!scene.boxes.iter().any(|b| b.id == "5" || b.id == "6"));
}

#[test]
fn dangling_child_ids_degrade_to_no_ops() {
    let config = BoardConfig::default();
    let store = forest(&[("a", &["ghost", "b"]), ("b", &[])]);

    assert_eq!(visible_ids(&store), ["a", "b"]);
    assert_eq!(connectors(&store, &config).len(), 1);
    let laid = tidy_layout(&store, &config);
    assert_eq!(laid.len(), 2);
    let toggled = toggle_selection(&store, "a");
    assert!(toggled.get("b").unwrap().selected);
}

#[test]
fn scene_carries_box_renderer_contract() {
    let config = BoardConfig::default();
    let scene = build_scene(&demo_store(), &config);
    assert_eq!(scene.boxes.len(), 16);
    let root = scene.boxes.iter().find(|b| b.id == "1").unwrap();
    assert!(root.has_children);
    assert!(!root.collapsed);
    assert_eq!(root.title, "Project Overview");
    // One connector per parent-child edge in the fully expanded forest.
    assert_eq!(scene.connectors.len(), 14);
}

#[test]
fn svg_output_renders_boxes_and_curved_connectors() {
    let config = BoardConfig::default();
    let theme = Theme::light();
    let store = tidy_layout(&demo_store(), &config);
    let svg = render_svg(&build_scene(&store, &config), &theme, &config);

    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("Project Overview"));
    assert!(svg.contains(" Q "));
    assert!(svg.contains("stroke-dasharray=\"5,5\""));
}

#[test]
fn board_dump_serializes_resolved_scene() {
    let config = BoardConfig::default();
    let store = demo_store().with_collapse_toggled("note2");
    let scene = build_scene(&store, &config);
    let dump = BoardDump::from_scene(&scene, &store);

    assert_eq!(dump.note_count, 16);
    assert_eq!(dump.visible.len(), 14);
    let json = serde_json::to_string(&dump).unwrap();
    assert!(json.contains("\"note_count\":16"));
}
