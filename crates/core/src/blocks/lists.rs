//! Secondary grids for auxiliary content: two-column lists and the wider
//! conditions table for terms and fine print.

use crate::blocks::section::{DEFAULT_SPACING, hr_line, space};
use crate::table::{TableRequest, render_table};
use receipt_render_core::{DocumentSurface, RenderError};
use receipt_style::{CellStyle, Edges, FontWeight, StyleRule, StyleScope, TextAlign, palette};
use receipt_types::Color;

const LIST_SIZE: f32 = 39.0;
const CONDITIONS_SIZE: f32 = 30.0;
const ROW_BORDER_WIDTH: f32 = 4.0;

fn bordered_base(font_size: f32) -> CellStyle {
    CellStyle {
        font_size: Some(font_size),
        font_weight: Some(FontWeight::Bold),
        borders: Some(Edges::bottom()),
        border_color: Some(palette::TABLE_BORDER),
        border_width: Some(ROW_BORDER_WIDTH),
        padding_top: Some(50.0),
        padding_bottom: Some(20.0),
        ..Default::default()
    }
}

fn edge_column_rules(text_color: Color) -> Vec<StyleRule> {
    vec![
        StyleRule::new(
            StyleScope::Column(0),
            CellStyle {
                text_color: Some(text_color),
                padding_left: Some(30.0),
                ..Default::default()
            },
        ),
        StyleRule::new(
            StyleScope::Column(1),
            CellStyle {
                text_color: Some(palette::GRAY),
                padding_right: Some(30.0),
                align: Some(TextAlign::Right),
                ..Default::default()
            },
        ),
    ]
}

/// A generic two-column list: labels left in the caller's color, values
/// right-aligned in gray. Followed by a spacer.
pub fn list(
    surface: &mut dyn DocumentSurface,
    rows: &[Vec<String>],
    text_color: Color,
) -> Result<(), RenderError> {
    let width = surface.bounds_width();
    render_table(
        surface,
        &TableRequest {
            width,
            rows: rows.to_vec(),
            base: bordered_base(LIST_SIZE),
            rules: edge_column_rules(text_color),
            ..Default::default()
        },
    )?;
    space(surface, DEFAULT_SPACING);
    Ok(())
}

/// The conditions table: same conventions as [`list`] at a smaller size,
/// preceded by a horizontal rule, with any trailing columns right-aligned.
pub fn conditions_list(
    surface: &mut dyn DocumentSurface,
    rows: &[Vec<String>],
    text_color: Color,
) -> Result<(), RenderError> {
    hr_line(surface)?;

    let cols = rows.first().map(Vec::len).unwrap_or(0);
    let mut rules = edge_column_rules(text_color);
    for col in 2..cols {
        rules.push(StyleRule::new(
            StyleScope::Column(col),
            CellStyle { align: Some(TextAlign::Right), ..Default::default() },
        ));
    }

    let width = surface.bounds_width();
    render_table(
        surface,
        &TableRequest {
            width,
            rows: rows.to_vec(),
            base: bordered_base(CONDITIONS_SIZE),
            rules,
            ..Default::default()
        },
    )
}
