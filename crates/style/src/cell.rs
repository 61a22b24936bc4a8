//! Cell-level style attributes and the scoped patch rules that compose them.
//!
//! A table carries an ordered list of [`StyleRule`]s. Resolving a cell walks
//! the list in order and merges every rule whose scope covers the cell into a
//! base style, one attribute at a time. A later rule therefore wins any
//! attribute it sets, regardless of scope kind. Blocks list row-scoped rules
//! before column-scoped ones, so column scope takes precedence on overlap
//! unless a rule is deliberately re-asserted at the end of the list.

use crate::font::{FontStyle, FontWeight};
use crate::text::TextAlign;
use receipt_types::Color;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Which edges of a cell are stroked.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edges {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Edges {
    pub const fn none() -> Self {
        Self { top: false, right: false, bottom: false, left: false }
    }

    pub const fn all() -> Self {
        Self { top: true, right: true, bottom: true, left: true }
    }

    pub const fn bottom() -> Self {
        Self { top: false, right: false, bottom: true, left: false }
    }

    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

/// Presentation attributes attachable to a cell, a row, or a column range.
///
/// Every field is optional; unset fields fall through to the base style of
/// the enclosing table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CellStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borders: Option<Edges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f32>,
}

impl CellStyle {
    /// Overlays `patch` onto `self`: every attribute the patch sets replaces
    /// the current value, every unset attribute is left alone.
    pub fn merge(&mut self, patch: &CellStyle) {
        macro_rules! take {
            ($field:ident) => {
                if patch.$field.is_some() {
                    self.$field = patch.$field.clone();
                }
            };
        }
        take!(font_size);
        take!(font_weight);
        take!(font_style);
        take!(text_color);
        take!(align);
        take!(borders);
        take!(border_width);
        take!(border_color);
        take!(padding_top);
        take!(padding_right);
        take!(padding_bottom);
        take!(padding_left);
    }
}

/// The set of cells a [`StyleRule`] applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleScope {
    /// Every cell of the table.
    Table,
    /// One row, by index.
    Row(usize),
    /// One column, by index.
    Column(usize),
    /// A half-open range of columns.
    Columns(Range<usize>),
    /// A single cell.
    Cell { row: usize, col: usize },
}

impl StyleScope {
    pub fn applies(&self, row: usize, col: usize) -> bool {
        match self {
            StyleScope::Table => true,
            StyleScope::Row(r) => *r == row,
            StyleScope::Column(c) => *c == col,
            StyleScope::Columns(range) => range.contains(&col),
            StyleScope::Cell { row: r, col: c } => *r == row && *c == col,
        }
    }
}

/// One scoped style patch in a table's ordered rule list.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub scope: StyleScope,
    pub patch: CellStyle,
}

impl StyleRule {
    pub fn new(scope: StyleScope, patch: CellStyle) -> Self {
        Self { scope, patch }
    }
}

/// Computes the effective style of one cell by merging, in order, every rule
/// whose scope covers it over the base style.
pub fn resolve_cell_style(
    base: &CellStyle,
    rules: &[StyleRule],
    row: usize,
    col: usize,
) -> CellStyle {
    let mut style = base.clone();
    for rule in rules {
        if rule.scope.applies(row, col) {
            style.merge(&rule.patch);
        }
    }
    style
}
