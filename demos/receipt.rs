//! End-to-end demo: compose a receipt with the recording backend and publish
//! it into a filesystem-backed bucket under `./store`.
//!
//! Run with `RUST_LOG=debug` to watch the pipeline stages.

use good_receipt::{FilesystemObjectStore, Receipt, ReceiptConfig, RecordingBackend};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let raw: serde_json::Value = serde_json::from_str(
        r#"{
            "lineItemGroups": [
                {
                    "name": "Beverages",
                    "items": [
                        {"name": "Flat White", "quantity": 2, "price": 4.5},
                        {"name": "Drip Coffee", "quantity": 1, "price": 2.75}
                    ]
                },
                {
                    "name": "Pastries",
                    "items": [
                        {"name": "Croissant", "quantity": 3, "price": 3.25}
                    ]
                }
            ],
            "customerName": "Jane Doe",
            "discount": 2.00,
            "tax": 1.64,
            "totalPrice": 21.14,
            "date": null,
            "id": "2024-0042"
        }"#,
    )?;

    let config = ReceiptConfig {
        business_name: "North End Coffee".to_string(),
        business_phone: "(555) 010-2030".to_string(),
        business_email: "hello@northend.coffee".to_string(),
        storage_bucket: "northend-receipts".to_string(),
        storage_project_id: "northend-prod".to_string(),
        storage_credentials: "unused-by-the-filesystem-store".to_string(),
    };

    let store = FilesystemObjectStore::new("./store", config.storage_bucket.clone());
    let receipt = Receipt::new(config, Box::new(RecordingBackend::new()), Box::new(store))?;

    let url = receipt.generate(&raw)?;
    println!("receipt published at {url}");
    Ok(())
}
