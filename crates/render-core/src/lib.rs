//! Core drawing abstractions for receipt generation.
//!
//! This crate provides the boundary between the layout engine and whatever
//! typesetting backend draws the pages:
//! - `DocumentSurface` / `DocumentBackend` traits abstracting the drawing
//!   primitives (text, table grids, images, rules, cursor movement)
//! - Fully-resolved paint types handed across that boundary
//! - `RecordingSurface`, an in-memory backend used by tests and demos

mod error;
pub mod recording;
mod traits;
mod types;

pub use error::RenderError;
pub use recording::{DrawOp, RecordingBackend, RecordingSurface};
pub use traits::{DocumentBackend, DocumentSurface};
pub use types::{
    FontFaces, ImageAnchor, ImagePlacement, PaintedCell, ResolvedCellStyle, RuleSpec, TableGrid,
    TextStyle,
};
