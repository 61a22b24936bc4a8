//! The page header: title, logo, and the customer/business meta table.

use crate::blocks::section::space;
use crate::table::{TableRequest, render_table};
use receipt_render_core::{DocumentSurface, ImageAnchor, ImagePlacement, RenderError, TextStyle};
use receipt_style::{CellStyle, Dimension, FontWeight, StyleRule, StyleScope, TextAlign, palette};

const TITLE_SIZE: f32 = 59.0;
const INFO_SIZE: f32 = 34.0;
const IDENTITY_SIZE: f32 = 35.0;
const TRAILING_SPACE: f32 = 80.0;

/// The header's data: who the receipt is for, when, and who issued it.
#[derive(Debug, Clone)]
pub struct HeaderMeta {
    pub customer_name: String,
    pub date: String,
    /// Business identity lines, rendered top-right (name, phone, email).
    pub identity: Vec<String>,
}

/// Lays out the title with the logo anchored top-right, then the two-column
/// meta table: labeled customer info left, business identity right.
pub fn header(
    surface: &mut dyn DocumentSurface,
    title: &str,
    meta: &HeaderMeta,
    logo_source: &str,
) -> Result<(), RenderError> {
    surface.draw_image(&ImagePlacement {
        source: logo_source.to_string(),
        anchor: ImageAnchor::Right,
        size: None,
    })?;
    surface.draw_text(
        title,
        &TextStyle {
            font_size: TITLE_SIZE,
            font_weight: FontWeight::Bold,
            color: palette::BRAND,
            ..Default::default()
        },
    )?;

    // Left column interleaves label/value pairs; the right column carries the
    // identity lines, padded so the grid stays rectangular.
    let info: Vec<String> = vec![
        "Customer Name".to_string(),
        meta.customer_name.clone(),
        "Date".to_string(),
        meta.date.clone(),
    ];
    let height = info.len().max(meta.identity.len());
    let rows: Vec<Vec<String>> = (0..height)
        .map(|i| {
            vec![
                info.get(i).cloned().unwrap_or_default(),
                meta.identity.get(i).cloned().unwrap_or_default(),
            ]
        })
        .collect();

    let mut rules = vec![StyleRule::new(
        StyleScope::Column(0),
        CellStyle { font_size: Some(INFO_SIZE), ..Default::default() },
    )];
    for row in 0..info.len() {
        let patch = if row % 2 == 0 {
            CellStyle { text_color: Some(palette::GRAY), ..Default::default() }
        } else {
            CellStyle {
                font_weight: Some(FontWeight::Bold),
                padding_bottom: Some(15.0),
                ..Default::default()
            }
        };
        rules.push(StyleRule::new(StyleScope::Cell { row, col: 0 }, patch));
    }
    rules.push(StyleRule::new(
        StyleScope::Column(1),
        CellStyle {
            font_size: Some(IDENTITY_SIZE),
            align: Some(TextAlign::Right),
            ..Default::default()
        },
    ));

    let width = surface.bounds_width();
    render_table(
        surface,
        &TableRequest {
            width,
            columns: vec![Dimension::Percent(50.0), Dimension::Percent(50.0)],
            rows,
            base: CellStyle::default(),
            rules,
        },
    )?;

    space(surface, TRAILING_SPACE);
    Ok(())
}
