//! Currency arithmetic and display formatting.

/// Rounds to 2 decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a computed amount the way the receipt displays it: integral
/// values keep one decimal (`7` renders as `"7.0"`), everything else uses
/// the shortest exact representation.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
