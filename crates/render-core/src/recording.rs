//! An in-memory drawing surface that records operations instead of
//! typesetting them.
//!
//! The recording surface stands in for a real typesetting backend in tests
//! and demos: blocks can be asserted against the captured operation stream,
//! and [`RecordingSurface::finish`] renders a deterministic plain-text
//! artifact (one line per operation, cells pipe-separated) that downstream
//! checks can re-parse.

use crate::error::RenderError;
use crate::traits::{DocumentBackend, DocumentSurface};
use crate::types::{FontFaces, ImagePlacement, RuleSpec, TableGrid, TextStyle};
use receipt_style::{Margins, PageSize};
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    RegisterFont { family: String },
    Text { content: String, style: TextStyle },
    Table(TableGrid),
    Image(ImagePlacement),
    Rule(RuleSpec),
    MoveDown(f32),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: f32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f32) -> Self {
        Self { width, ops: Vec::new() }
    }

    /// The operations recorded so far, in draw order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

impl DocumentSurface for RecordingSurface {
    fn bounds_width(&self) -> f32 {
        self.width
    }

    fn register_font(&mut self, family: &str, _faces: &FontFaces) -> Result<(), RenderError> {
        self.ops.push(DrawOp::RegisterFont { family: family.to_string() });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, style: &TextStyle) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Text { content: text.to_string(), style: style.clone() });
        Ok(())
    }

    fn draw_table(&mut self, grid: &TableGrid) -> Result<(), RenderError> {
        let cols = grid.cells.first().map(Vec::len).unwrap_or(0);
        if let Some(ragged) = grid.cells.iter().position(|row| row.len() != cols) {
            return Err(RenderError::Geometry(format!(
                "ragged table: row {} has {} cells, expected {}",
                ragged,
                grid.cells[ragged].len(),
                cols
            )));
        }
        if grid.column_widths.len() > cols && cols > 0 {
            return Err(RenderError::Geometry(format!(
                "{} column widths for {} columns",
                grid.column_widths.len(),
                cols
            )));
        }
        self.ops.push(DrawOp::Table(grid.clone()));
        Ok(())
    }

    fn draw_image(&mut self, image: &ImagePlacement) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Image(image.clone()));
        Ok(())
    }

    fn draw_rule(&mut self, rule: &RuleSpec) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Rule(rule.clone()));
        Ok(())
    }

    fn move_down(&mut self, height: f32) {
        self.ops.push(DrawOp::MoveDown(height));
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        let mut out = String::from("%receipt-recording v1\n");
        for op in &self.ops {
            match op {
                DrawOp::RegisterFont { family } => writeln!(out, "font {}", family),
                DrawOp::Text { content, style } => {
                    writeln!(out, "text[{}] {}", style.font_size, content)
                }
                DrawOp::Table(grid) => {
                    writeln!(out, "table width={} cols={}", grid.width, grid.column_widths.len())
                        .and_then(|_| {
                            for row in &grid.cells {
                                write!(out, "|")?;
                                for cell in row {
                                    write!(out, " {} |", cell.text)?;
                                }
                                writeln!(out)?;
                            }
                            Ok(())
                        })
                }
                DrawOp::Image(image) => writeln!(out, "image {}", image.source),
                DrawOp::Rule(rule) => writeln!(out, "rule {}", rule.line_width),
                DrawOp::MoveDown(height) => writeln!(out, "move {}", height),
            }
            .map_err(|e| RenderError::Other(e.to_string()))?;
        }
        Ok(out.into_bytes())
    }
}

/// Backend producing [`RecordingSurface`]s sized to the page content width.
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend;

impl RecordingBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentBackend for RecordingBackend {
    fn begin_document(
        &self,
        size: &PageSize,
        margins: &Margins,
    ) -> Result<Box<dyn DocumentSurface>, RenderError> {
        let width = size.content_width(margins);
        if width <= 0.0 {
            return Err(RenderError::Geometry(format!(
                "margins leave no drawable width on a {}pt wide page",
                size.dimensions_pt().0
            )));
        }
        Ok(Box::new(RecordingSurface::new(width)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PaintedCell, ResolvedCellStyle};

    fn cell(text: &str) -> PaintedCell {
        PaintedCell { text: text.to_string(), style: ResolvedCellStyle::default() }
    }

    #[test]
    fn records_ops_in_draw_order() {
        let mut surface = RecordingSurface::new(500.0);
        surface.draw_text("Receipt", &TextStyle::default()).unwrap();
        surface.move_down(80.0);

        assert_eq!(surface.ops().len(), 2);
        assert!(matches!(&surface.ops()[0], DrawOp::Text { content, .. } if content == "Receipt"));
        assert!(matches!(surface.ops()[1], DrawOp::MoveDown(h) if h == 80.0));
    }

    #[test]
    fn rejects_ragged_grid() {
        let mut surface = RecordingSurface::new(500.0);
        let grid = TableGrid {
            width: 500.0,
            column_widths: vec![None, None],
            cells: vec![vec![cell("a"), cell("b")], vec![cell("only one")]],
        };
        assert!(matches!(surface.draw_table(&grid), Err(RenderError::Geometry(_))));
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn finish_renders_parseable_text() {
        let mut surface = Box::new(RecordingSurface::new(500.0));
        surface.draw_text("Receipt", &TextStyle { font_size: 59.0, ..Default::default() }).unwrap();
        let grid = TableGrid {
            width: 500.0,
            column_widths: vec![None, Some(350.0)],
            cells: vec![vec![cell("Total Price"), cell("$6.00")]],
        };
        surface.draw_table(&grid).unwrap();

        let text = String::from_utf8(surface.finish().unwrap()).unwrap();
        assert!(text.contains("text[59] Receipt"));
        assert!(text.contains("| Total Price | $6.00 |"));
    }

    #[test]
    fn backend_sizes_surface_to_content_width() {
        let backend = RecordingBackend::new();
        let surface = backend
            .begin_document(
                &PageSize::Custom { width: 2480.0, height: 3508.0 },
                &Margins::symmetric(140.0, 180.0),
            )
            .unwrap();
        assert_eq!(surface.bounds_width(), 2120.0);
    }

    #[test]
    fn backend_rejects_margins_wider_than_page() {
        let backend = RecordingBackend::new();
        let result = backend.begin_document(&PageSize::A4, &Margins::symmetric(0.0, 400.0));
        assert!(matches!(result, Err(RenderError::Geometry(_))));
    }
}
