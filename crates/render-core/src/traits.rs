use crate::error::RenderError;
use crate::types::{FontFaces, ImagePlacement, RuleSpec, TableGrid, TextStyle};
use receipt_style::{Margins, PageSize};
use std::fmt::Debug;

/// A trait for document drawing surfaces, abstracting the typesetting
/// primitives this engine composes with.
///
/// A surface is exclusively owned for the duration of one generation and is
/// consumed by [`DocumentSurface::finish`], which yields the rendered
/// artifact bytes. Style or geometry violations are the surface's to reject;
/// the layout engine passes them through unmodified.
pub trait DocumentSurface {
    /// Width of the drawable area inside the page margins.
    fn bounds_width(&self) -> f32;

    /// Register a font family from its face files and make it current.
    fn register_font(&mut self, family: &str, faces: &FontFaces) -> Result<(), RenderError>;

    /// Draw a text run at the cursor and advance past it.
    fn draw_text(&mut self, text: &str, style: &TextStyle) -> Result<(), RenderError>;

    /// Draw a resolved grid of cells at the cursor and advance past it.
    fn draw_table(&mut self, grid: &TableGrid) -> Result<(), RenderError>;

    /// Place an image at the cursor line.
    fn draw_image(&mut self, image: &ImagePlacement) -> Result<(), RenderError>;

    /// Stroke a horizontal rule across the content width.
    fn draw_rule(&mut self, rule: &RuleSpec) -> Result<(), RenderError>;

    /// Advance the vertical cursor.
    fn move_down(&mut self, height: f32);

    /// Finalize the document and return the artifact bytes.
    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError>;
}

/// Creates drawing surfaces with a given page geometry.
pub trait DocumentBackend: Send + Sync + Debug {
    fn begin_document(
        &self,
        size: &PageSize,
        margins: &Margins,
    ) -> Result<Box<dyn DocumentSurface>, RenderError>;
}
