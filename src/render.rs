use crate::config::BoardConfig;
use crate::scene::{NoteBox, Scene};
use crate::theme::Theme;
use crate::visibility::Connector;

pub fn render_svg(scene: &Scene, theme: &Theme, config: &BoardConfig) -> String {
    let (width, height) = scene_extent(scene, config);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    // Connectors go under the boxes, matching the app's z-order.
    for connector in &scene.connectors {
        push_connector(&mut svg, connector, theme, config);
    }
    for note in &scene.boxes {
        push_note_box(&mut svg, note, theme, config);
    }

    svg.push_str("</svg>");
    svg
}

fn scene_extent(scene: &Scene, config: &BoardConfig) -> (f32, f32) {
    let mut max_x: f32 = 0.0;
    let mut max_y: f32 = 0.0;
    for note in &scene.boxes {
        max_x = max_x.max(note.position.x + config.note_width);
        max_y = max_y.max(note.position.y + config.note_height);
    }
    let width = (max_x + config.margin).max(config.viewport_width);
    let height = (max_y + config.margin).max(config.min_canvas_height);
    (width, height)
}

/// Quadratic Bezier between the two anchors, lifted above the endpoints, with
/// a filled arrowhead aligned to the curve's end tangent and a dot on each
/// anchor.
fn push_connector(svg: &mut String, connector: &Connector, theme: &Theme, config: &BoardConfig) {
    let start = connector.start;
    let end = connector.end;

    let mid_x = (start.x + end.x) / 2.0;
    let distance = (end.x - start.x).abs();
    let control_y = start.y.min(end.y) - distance * config.curve_lift;

    // For a quadratic curve the end tangent runs from the control point to
    // the end point.
    let tangent = (end.y - control_y).atan2(end.x - mid_x);
    let head = config.arrow_head_length;
    let left = (
        end.x - head * (tangent - std::f32::consts::FRAC_PI_6).cos(),
        end.y - head * (tangent - std::f32::consts::FRAC_PI_6).sin(),
    );
    let right = (
        end.x - head * (tangent + std::f32::consts::FRAC_PI_6).cos(),
        end.y - head * (tangent + std::f32::consts::FRAC_PI_6).sin(),
    );

    svg.push_str(&format!(
        "<path d=\"M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}\" stroke=\"{}\" stroke-width=\"2\" stroke-dasharray=\"5,5\" fill=\"none\"/>",
        start.x, start.y, mid_x, control_y, end.x, end.y, theme.line_color
    ));
    svg.push_str(&format!(
        "<path d=\"M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2} Z\" fill=\"{}\"/>",
        end.x, end.y, left.0, left.1, right.0, right.1, theme.line_color
    ));
    for (cx, cy) in [(start.x, start.y), (end.x, end.y)] {
        svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"/>",
            cx, cy, config.endpoint_radius, theme.line_color
        ));
    }
}

fn push_note_box(svg: &mut String, note: &NoteBox, theme: &Theme, config: &BoardConfig) {
    let x = note.position.x;
    let y = note.position.y;
    let border = if note.selected {
        &theme.selected_border
    } else {
        &theme.note_border
    };
    let border_width = if note.selected { 2.5 } else { 1.0 };

    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{}\" ry=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
        x,
        y,
        config.note_width,
        config.note_height,
        config.corner_radius,
        config.corner_radius,
        theme.note_fill,
        border,
        border_width
    ));
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
        x + 12.0,
        y + 24.0,
        theme.font_family,
        theme.title_font_size,
        theme.title_color,
        escape_xml(&note.title)
    ));
    if note.has_children {
        let glyph = if note.collapsed { "\u{25B6}" } else { "\u{25BC}" };
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            x + config.note_width - 24.0,
            y + 24.0,
            theme.font_family,
            theme.title_font_size,
            theme.title_color,
            glyph
        ));
    }
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
        x + 12.0,
        y + 52.0,
        theme.font_family,
        theme.content_font_size,
        theme.content_color,
        escape_xml(&note.content)
    ));
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
