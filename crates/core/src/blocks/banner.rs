//! The settled-payment banner.

use crate::table::{TableRequest, render_table};
use receipt_render_core::{DocumentSurface, RenderError};
use receipt_style::{CellStyle, FontWeight, StyleRule, StyleScope, TextAlign, palette};

const LEFT_SIZE: f32 = 40.0;
const BANNER_SIZE: f32 = 70.0;

/// A borderless two-cell row whose right cell shouts PAID in the success
/// color.
pub fn paid_banner(surface: &mut dyn DocumentSurface) -> Result<(), RenderError> {
    let rules = vec![
        StyleRule::new(
            StyleScope::Column(0),
            CellStyle { font_size: Some(LEFT_SIZE), ..Default::default() },
        ),
        StyleRule::new(
            StyleScope::Column(1),
            CellStyle {
                align: Some(TextAlign::Right),
                font_size: Some(BANNER_SIZE),
                text_color: Some(palette::SUCCESS),
                font_weight: Some(FontWeight::Bold),
                padding_right: Some(50.0),
                ..Default::default()
            },
        ),
    ];

    let width = surface.bounds_width();
    render_table(
        surface,
        &TableRequest {
            width,
            rows: vec![vec![String::new(), "PAID".to_string()]],
            rules,
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_render_core::{DrawOp, RecordingSurface};
    use receipt_style::Edges;

    #[test]
    fn banner_cell_is_loud_and_borderless() {
        let mut surface = RecordingSurface::new(2120.0);
        paid_banner(&mut surface).unwrap();

        let DrawOp::Table(grid) = &surface.ops()[0] else { panic!("expected a table op") };
        assert_eq!(grid.cells.len(), 1);
        let banner = &grid.cells[0][1];
        assert_eq!(banner.text, "PAID");
        assert_eq!(banner.style.font_size, BANNER_SIZE);
        assert_eq!(banner.style.text_color, palette::SUCCESS);
        assert_eq!(banner.style.font_weight, FontWeight::Bold);
        assert_eq!(banner.style.align, TextAlign::Right);
        assert_eq!(banner.style.padding_right, 50.0);
        assert_eq!(banner.style.borders, Edges::none());
    }
}
