//! Shared fixtures for the integration suite.
#![allow(dead_code)]

use good_receipt::{InMemoryObjectStore, Receipt, ReceiptConfig, RecordingBackend};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// The worked reference order: one group, one item, discount, no tax.
pub fn widgets_order() -> Value {
    order_json(
        r#"{
            "lineItemGroups": [
                {"name": "Widgets", "items": [{"name": "Widget A", "quantity": 2, "price": 3.5}]}
            ],
            "customerName": "Jane",
            "discount": 1.00,
            "totalPrice": 6.00,
            "date": "2024-01-01 10:00am",
            "id": "42"
        }"#,
    )
}

pub fn order_json(raw: &str) -> Value {
    serde_json::from_str(raw).expect("fixture JSON parses")
}

/// A composer wired to the recording backend and an in-memory store, writing
/// local artifacts into `output_dir`.
pub fn test_receipt(store: Arc<InMemoryObjectStore>, output_dir: &Path) -> Receipt {
    Receipt::new(ReceiptConfig::default(), Box::new(RecordingBackend::new()), Box::new(store))
        .expect("default config is complete")
        .with_output_dir(output_dir)
}
