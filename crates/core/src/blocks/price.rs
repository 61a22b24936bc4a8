//! The price table: the derived row grid with its full styling rule list.

use crate::blocks::section::space;
use crate::table::{TableRequest, render_table};
use receipt_render_core::{DocumentSurface, RenderError};
use receipt_style::{
    CellStyle, Dimension, Edges, FontWeight, StyleRule, StyleScope, TextAlign, palette,
};

/// Fixed width of every value column, in points.
pub const VALUE_COLUMN_WIDTH: f32 = 350.0;

const CELL_SIZE: f32 = 39.0;
const ROW_BORDER_WIDTH: f32 = 4.0;
const TRAILING_SPACE: f32 = 80.0;

/// Renders the price grid: description column bold in the brand color, value
/// columns right-aligned at a fixed width, header row distinguished in
/// black, every row bottom-bordered. Advances the cursor past the table.
pub fn price_table(
    surface: &mut dyn DocumentSurface,
    rows: &[Vec<String>],
) -> Result<(), RenderError> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    let cols = first.len();
    let last_col = cols.saturating_sub(1);

    let base = CellStyle {
        font_size: Some(CELL_SIZE),
        borders: Some(Edges::bottom()),
        border_color: Some(palette::TABLE_BORDER),
        border_width: Some(ROW_BORDER_WIDTH),
        padding_top: Some(50.0),
        padding_bottom: Some(20.0),
        text_color: Some(palette::GRAY),
        ..Default::default()
    };

    // Row rules come before column rules so column scope wins on overlap;
    // the header row's black restyle is re-asserted last on purpose.
    let rules = vec![
        StyleRule::new(
            StyleScope::Row(0),
            CellStyle { font_weight: Some(FontWeight::Bold), ..Default::default() },
        ),
        StyleRule::new(
            StyleScope::Column(0),
            CellStyle {
                font_weight: Some(FontWeight::Bold),
                text_color: Some(palette::BRAND),
                padding_left: Some(30.0),
                ..Default::default()
            },
        ),
        StyleRule::new(
            StyleScope::Columns(1..cols),
            CellStyle { align: Some(TextAlign::Right), ..Default::default() },
        ),
        StyleRule::new(
            StyleScope::Column(last_col),
            CellStyle {
                padding_right: Some(30.0),
                font_weight: Some(FontWeight::Bold),
                ..Default::default()
            },
        ),
        StyleRule::new(
            StyleScope::Row(0),
            CellStyle {
                text_color: Some(palette::BLACK),
                border_color: Some(palette::BLACK),
                ..Default::default()
            },
        ),
    ];

    let mut columns = vec![Dimension::Auto];
    columns.extend(vec![Dimension::Pt(VALUE_COLUMN_WIDTH); cols.saturating_sub(1)]);

    let width = surface.bounds_width();
    render_table(
        surface,
        &TableRequest {
            width,
            columns,
            rows: rows.to_vec(),
            base,
            rules,
        },
    )?;
    space(surface, TRAILING_SPACE);
    Ok(())
}
