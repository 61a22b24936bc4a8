//! Fully-resolved paint types handed to a [`crate::DocumentSurface`].
//!
//! The layout engine resolves optional, scoped style attributes into these
//! concrete values before crossing the drawing boundary; backends never see a
//! half-specified style.

use receipt_style::{CellStyle, Edges, FontStyle, FontWeight, TextAlign};
use receipt_types::{Color, Size};

/// Effective text attributes for a free-standing text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub color: Color,
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            font_weight: FontWeight::Regular,
            color: Color::default(),
            align: TextAlign::Left,
        }
    }
}

/// Effective per-cell attributes after rule resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCellStyle {
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_color: Color,
    pub align: TextAlign,
    pub borders: Edges,
    pub border_width: f32,
    pub border_color: Color,
    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,
}

impl Default for ResolvedCellStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            font_weight: FontWeight::Regular,
            font_style: FontStyle::Normal,
            text_color: Color::default(),
            align: TextAlign::Left,
            borders: Edges::none(),
            border_width: 1.0,
            border_color: Color::default(),
            padding_top: 0.0,
            padding_right: 0.0,
            padding_bottom: 0.0,
            padding_left: 0.0,
        }
    }
}

impl ResolvedCellStyle {
    /// Fills defaults for every attribute the resolved style left unset.
    pub fn from_style(style: &CellStyle) -> Self {
        let defaults = Self::default();
        Self {
            font_size: style.font_size.unwrap_or(defaults.font_size),
            font_weight: style.font_weight.clone().unwrap_or(defaults.font_weight),
            font_style: style.font_style.clone().unwrap_or(defaults.font_style),
            text_color: style.text_color.unwrap_or(defaults.text_color),
            align: style.align.unwrap_or(defaults.align),
            borders: style.borders.unwrap_or(defaults.borders),
            border_width: style.border_width.unwrap_or(defaults.border_width),
            border_color: style.border_color.unwrap_or(defaults.border_color),
            padding_top: style.padding_top.unwrap_or(defaults.padding_top),
            padding_right: style.padding_right.unwrap_or(defaults.padding_right),
            padding_bottom: style.padding_bottom.unwrap_or(defaults.padding_bottom),
            padding_left: style.padding_left.unwrap_or(defaults.padding_left),
        }
    }
}

/// One cell of a resolved table grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintedCell {
    pub text: String,
    pub style: ResolvedCellStyle,
}

/// A resolved grid of cells, ready to draw.
///
/// `column_widths[i]` is `None` for columns that share the leftover width.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableGrid {
    pub width: f32,
    pub column_widths: Vec<Option<f32>>,
    pub cells: Vec<Vec<PaintedCell>>,
}

/// A stroked horizontal rule across the content width.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSpec {
    pub line_width: f32,
    pub color: Color,
}

/// Horizontal anchoring for placed images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImagePlacement {
    pub source: String,
    pub anchor: ImageAnchor,
    pub size: Option<Size>,
}

/// Font face files registered under one family name.
#[derive(Debug, Clone, PartialEq)]
pub struct FontFaces {
    pub normal: String,
    pub bold: String,
    pub italic: String,
}
