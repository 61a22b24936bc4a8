//! # receipt-core
//!
//! Receipt document composition: input validation, display-row derivation,
//! layout blocks, and the composer that orchestrates them into a persisted
//! artifact.
//!
//! This crate has no drawing or storage implementation of its own; both are
//! consumed through the traits in `receipt-render-core` and
//! `receipt-traits`.

pub mod blocks;
pub mod config;
pub mod error;
pub mod money;
pub mod order;
pub mod receipt;
pub mod rows;
pub mod table;

pub use config::ReceiptConfig;
pub use error::{ReceiptDataError, ReceiptError};
pub use order::{LineItemGroup, OrderData, REQUIRED_KEYS, validate};
pub use receipt::Receipt;
pub use rows::{DisplayRow, PRICE_TABLE_LABELS, derive_rows, rows_to_grid};
pub use table::{TableRequest, render_table};
