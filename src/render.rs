//! Plain-text rendering of a layout
//!
//! Used by the CLI to show a decoded plan. Rooms take two columns, wall
//! rows and columns one; items render as theme glyphs, walls and corners
//! as box-drawing characters. Image rendering stays outside the core.

use std::fmt::Write;

use crate::catalog::{PlacedItem, WallKind};
use crate::layout::{Cell, Layout, Position};
use crate::theme::Theme;

fn room_text(item: Option<PlacedItem>, theme: &Theme) -> String {
    match item {
        Some(item) => {
            let mut glyph: String = theme.glyph(item.kind).chars().take(2).collect();
            while glyph.chars().count() < 2 {
                glyph.push(' ');
            }
            glyph
        }
        None => "· ".to_string(),
    }
}

fn vertical_segment(kind: WallKind) -> char {
    match kind {
        WallKind::Empty => ' ',
        WallKind::Wall => '│',
        WallKind::Counter => '┆',
    }
}

fn horizontal_segment(kind: WallKind) -> &'static str {
    match kind {
        WallKind::Empty => "  ",
        WallKind::Wall => "──",
        WallKind::Counter => "┄┄",
    }
}

/// Render the grid as text, one line per grid row.
pub fn render_plan(layout: &Layout, theme: &Theme) -> String {
    let dims = layout.dimensions();
    let mut out = String::new();
    for row in 0..dims.rows() {
        for col in 0..dims.cols() {
            match layout.cell(Position::new(row, col)) {
                Cell::Room(item) => out.push_str(&room_text(item, theme)),
                Cell::Segment(kind) => {
                    if row % 2 == 0 {
                        out.push(vertical_segment(kind));
                    } else {
                        out.push_str(horizontal_segment(kind));
                    }
                }
                Cell::Corner(shape) => out.push(shape.glyph()),
            }
        }
        out.push('\n');
    }
    out
}

/// One line per placed item: position, label, orientation.
pub fn render_summary(layout: &Layout, theme: &Theme) -> String {
    let elements = layout.elements();
    if elements.is_empty() {
        return "no items placed\n".to_string();
    }
    let mut out = String::new();
    for (pos, item) in elements {
        writeln!(
            out,
            "{pos} {} at {}°",
            theme.label(item.kind),
            item.rotation.degrees()
        )
        .expect("writing to a String cannot fail");
    }
    out
}
