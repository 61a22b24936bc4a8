//! Composable page-layout recipes.
//!
//! Each block is a pure function from a drawing surface and its data to a
//! sequence of surface mutations. Blocks share the brand palette and the
//! table engine in [`crate::table`]; none of them recover from surface
//! errors.

mod banner;
mod header;
mod lists;
mod price;
mod section;

pub use banner::paid_banner;
pub use header::{HeaderMeta, header};
pub use lists::{conditions_list, list};
pub use price::{VALUE_COLUMN_WIDTH, price_table};
pub use section::{DEFAULT_SPACING, hr_line, section_title, space};
