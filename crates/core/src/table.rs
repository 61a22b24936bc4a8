//! Table rendering from a plain request structure.
//!
//! A [`TableRequest`] carries rows, column specs, and an ordered rule list;
//! [`render_table`] resolves every cell's effective style and hands one
//! resolved grid to the drawing surface. There is no builder and no
//! call-order dependence: rule precedence is the list order.

use receipt_render_core::{
    DocumentSurface, PaintedCell, RenderError, ResolvedCellStyle, TableGrid,
};
use receipt_style::{CellStyle, Dimension, StyleRule, resolve_cell_style};

#[derive(Debug, Clone, Default)]
pub struct TableRequest {
    /// Total table width, in points.
    pub width: f32,
    /// Per-column width specs; columns beyond this list share leftover space.
    pub columns: Vec<Dimension>,
    /// Cell text, row-major.
    pub rows: Vec<Vec<String>>,
    /// Style applied to every cell before the rules.
    pub base: CellStyle,
    /// Scoped patches, applied in order; later rules win per attribute.
    pub rules: Vec<StyleRule>,
}

/// Resolves a table request and draws it.
///
/// Geometry the surface rejects (ragged rows, over-wide columns) propagates
/// unmodified; this function performs no recovery.
pub fn render_table(
    surface: &mut dyn DocumentSurface,
    request: &TableRequest,
) -> Result<(), RenderError> {
    let cells = request
        .rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            row.iter()
                .enumerate()
                .map(|(col_index, text)| PaintedCell {
                    text: text.clone(),
                    style: ResolvedCellStyle::from_style(&resolve_cell_style(
                        &request.base,
                        &request.rules,
                        row_index,
                        col_index,
                    )),
                })
                .collect()
        })
        .collect();

    let grid = TableGrid {
        width: request.width,
        column_widths: request.columns.iter().map(|dim| dim.resolve(request.width)).collect(),
        cells,
    };
    surface.draw_table(&grid)
}
