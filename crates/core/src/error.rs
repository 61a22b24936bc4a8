//! Error types for receipt generation.
//!
//! Two kinds, both fatal to the generation that raised them:
//! [`ReceiptDataError`] for malformed input, [`ReceiptError`] for everything
//! else (configuration, rendering, persistence). Nothing is retried or
//! swallowed; errors surface synchronously from the top-level operation.

use receipt_render_core::RenderError;
use receipt_traits::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptDataError {
    #[error("Invalid data format: expected an object, got {0}")]
    NotAnObject(String),

    #[error("Missing key(s) in data: {missing:?}. Expected keys: {expected:?}")]
    MissingKeys { missing: Vec<String>, expected: Vec<&'static str> },

    #[error(
        "Invalid format in lineItemGroups: {0}. Each entry must be an object with name and items keys."
    )]
    InvalidLineItemGroups(String),

    #[error("Invalid {field} value: {value}")]
    InvalidAmount { field: &'static str, value: String },

    #[error("Invalid line item {field}: {value}")]
    InvalidItem { field: &'static str, value: String },
}

/// The main error enum for all high-level receipt operations.
#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Data(#[from] ReceiptDataError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
