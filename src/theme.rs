use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub title_font_size: f32,
    pub content_font_size: f32,
    pub background: String,
    pub note_fill: String,
    pub note_border: String,
    pub selected_border: String,
    pub title_color: String,
    pub content_color: String,
    pub line_color: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            title_font_size: 15.0,
            content_font_size: 12.0,
            background: "#FAFAFA".to_string(),
            note_fill: "#FFF9C4".to_string(),
            note_border: "#E0C97F".to_string(),
            selected_border: "#2196F3".to_string(),
            title_color: "#333333".to_string(),
            content_color: "#555555".to_string(),
            line_color: "#666666".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            title_font_size: 15.0,
            content_font_size: 12.0,
            background: "#1E1E1E".to_string(),
            note_fill: "#3A3726".to_string(),
            note_border: "#6B6037".to_string(),
            selected_border: "#64B5F6".to_string(),
            title_color: "#EEEEEE".to_string(),
            content_color: "#BBBBBB".to_string(),
            line_color: "#999999".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
