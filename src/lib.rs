//! # good-receipt
//!
//! Composes printable receipt documents from nested order data and hands the
//! finished artifact to an object store.
//!
//! The engine is split into small foundation crates, re-exported here:
//! - **types / style**: color, geometry, and the scoped style-rule model
//! - **render**: the `DocumentSurface` boundary to a typesetting backend,
//!   plus an in-memory recording backend
//! - **traits / resource**: the `ObjectStore` boundary and its in-memory and
//!   filesystem implementations
//! - **receipt-core**: validation, row derivation, layout blocks, and the
//!   [`Receipt`] composer

pub use receipt_render_core as render;
pub use receipt_resource as resource;
pub use receipt_style as style;
pub use receipt_traits as traits;
pub use receipt_types as types;

pub use receipt_core::{blocks, config, error, money, order, rows, table};

// The common surface for callers that just want to generate receipts.
pub use receipt_core::{
    DisplayRow, Receipt, ReceiptConfig, ReceiptDataError, ReceiptError, TableRequest, derive_rows,
    render_table, rows_to_grid, validate,
};
pub use receipt_render_core::{DocumentBackend, DocumentSurface, RecordingBackend, RenderError};
pub use receipt_resource::FilesystemObjectStore;
pub use receipt_traits::{InMemoryObjectStore, ObjectStore, StorageError};
