//! Typography and whitespace helpers shared by the larger blocks.

use receipt_render_core::{DocumentSurface, RenderError, RuleSpec, TextStyle};
use receipt_style::palette;

/// Vertical whitespace used between blocks unless a block asks otherwise.
pub const DEFAULT_SPACING: f32 = 30.0;

const SECTION_TITLE_SIZE: f32 = 60.0;
const RULE_LINE_WIDTH: f32 = 10.0;

pub fn space(surface: &mut dyn DocumentSurface, height: f32) {
    surface.move_down(height);
}

/// A brand-colored horizontal rule. Always followed by a spacer.
pub fn hr_line(surface: &mut dyn DocumentSurface) -> Result<(), RenderError> {
    surface.draw_rule(&RuleSpec { line_width: RULE_LINE_WIDTH, color: palette::BRAND })?;
    space(surface, DEFAULT_SPACING);
    Ok(())
}

pub fn section_title(
    surface: &mut dyn DocumentSurface,
    text: &str,
    underline: bool,
) -> Result<(), RenderError> {
    surface.draw_text(
        text,
        &TextStyle { font_size: SECTION_TITLE_SIZE, color: palette::BRAND, ..Default::default() },
    )?;
    space(surface, DEFAULT_SPACING);
    if underline {
        hr_line(surface)?;
    }
    Ok(())
}
