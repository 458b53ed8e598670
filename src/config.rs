use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Geometry knobs for layout, anchors and box rendering. Deserializes from a
/// partial JSON object; missing fields fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Width the tidy layout centers each level within.
    pub viewport_width: f32,
    /// Top margin and the horizontal inset the layout keeps clear.
    pub margin: f32,
    /// Horizontal budget per column before the viewport clamps it.
    pub min_node_spacing: f32,
    /// Vertical distance between consecutive tree levels.
    pub level_height: f32,
    /// Rendered note box width; connector anchor offsets derive from it.
    pub note_width: f32,
    /// Connector anchor offset from the box corner.
    pub anchor_inset: f32,
    pub note_height: f32,
    /// Smallest height the rendered canvas collapses to when the scene is
    /// empty or very shallow.
    pub min_canvas_height: f32,
    pub corner_radius: f32,
    pub arrow_head_length: f32,
    pub endpoint_radius: f32,
    /// How far the connector curve lifts above the endpoints, as a fraction
    /// of the horizontal distance between them.
    pub curve_lift: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1000.0,
            margin: 50.0,
            min_node_spacing: 300.0,
            level_height: 200.0,
            note_width: 250.0,
            anchor_inset: 10.0,
            note_height: 120.0,
            min_canvas_height: 200.0,
            corner_radius: 8.0,
            arrow_head_length: 15.0,
            endpoint_radius: 4.0,
            curve_lift: 0.15,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub board: BoardConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    board: Option<BoardConfig>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "dark" {
            config.theme = Theme::dark();
        } else if theme_name == "light" || theme_name == "default" {
            config.theme = Theme::light();
        }
    }
    if let Some(board) = parsed.board {
        config.board = board;
    }

    Ok(config)
}
