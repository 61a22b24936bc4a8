//! The receipt brand palette, applied uniformly across table constructs.

use receipt_types::Color;

/// Brand color used for titles, rules, and first-column emphasis.
pub const BRAND: Color = Color::rgb(0x3f, 0x51, 0xb5);

/// Body text color for value cells.
pub const GRAY: Color = Color::rgb(0x9b, 0x9b, 0x9b);

/// Header-row text and border color.
pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

/// Signals a settled payment.
pub const SUCCESS: Color = Color::rgb(0x2e, 0xcc, 0x71);

/// Light separator under data rows.
pub const TABLE_BORDER: Color = Color::rgb(0xdd, 0xdd, 0xdd);
