//! The receipt composer: validate, derive, render, persist.

use crate::blocks::{self, HeaderMeta};
use crate::config::ReceiptConfig;
use crate::error::ReceiptError;
use crate::order::validate;
use crate::rows::{derive_rows, rows_to_grid};
use chrono::{FixedOffset, Utc};
use log::{debug, info};
use receipt_render_core::{DocumentBackend, FontFaces};
use receipt_style::{Margins, PageSize};
use receipt_traits::ObjectStore;
use serde_json::Value;
use std::path::PathBuf;

const PAGE_SIZE: PageSize = PageSize::Custom { width: 2480.0, height: 3508.0 };
const PAGE_MARGINS: Margins = Margins::symmetric(140.0, 180.0);
const FONT_FAMILY: &str = "AvenirNext";
const LOGO_SOURCE: &str = "./images/main.png";

/// Composes receipt documents and hands the finished artifact to the
/// configured object store.
///
/// Configuration is a constructor requirement: a `Receipt` with incomplete
/// settings cannot be built, so generation never starts unconfigured. One
/// composer generates receipts one at a time; concurrent generations need
/// their own composer and unique order ids.
#[derive(Debug)]
pub struct Receipt {
    config: ReceiptConfig,
    backend: Box<dyn DocumentBackend>,
    store: Box<dyn ObjectStore>,
    output_dir: PathBuf,
}

impl Receipt {
    pub fn new(
        config: ReceiptConfig,
        backend: Box<dyn DocumentBackend>,
        store: Box<dyn ObjectStore>,
    ) -> Result<Self, ReceiptError> {
        config.validate()?;
        Ok(Self { config, backend, store, output_dir: PathBuf::from(".") })
    }

    /// Directory the local `receipt-<id>.pdf` artifact is written into.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Generates one receipt from the raw order payload and returns the
    /// public URL of the persisted artifact.
    ///
    /// Either a complete document is rendered and persisted, or the first
    /// failure aborts the run with nothing uploaded.
    pub fn generate(&self, raw: &Value) -> Result<String, ReceiptError> {
        let order = validate(raw)?;
        let rows = derive_rows(&order)?;
        debug!("derived {} display rows for order {}", rows.len(), order.id);

        let mut surface = self.backend.begin_document(&PAGE_SIZE, &PAGE_MARGINS)?;
        surface.register_font(FONT_FAMILY, &font_faces())?;

        let meta = HeaderMeta {
            customer_name: order.customer_name.clone(),
            date: order.date.clone().unwrap_or_else(default_timestamp),
            identity: vec![
                self.config.business_name.clone(),
                self.config.business_phone.clone(),
                self.config.business_email.clone(),
            ],
        };
        blocks::header(surface.as_mut(), "Receipt", &meta, LOGO_SOURCE)?;
        blocks::price_table(surface.as_mut(), &rows_to_grid(&rows))?;
        blocks::paid_banner(surface.as_mut())?;
        let bytes = surface.finish()?;

        let local_path = self.output_dir.join(format!("receipt-{}.pdf", order.id));
        std::fs::write(&local_path, &bytes)?;
        debug!("wrote {} ({} bytes)", local_path.display(), bytes.len());

        let handle = self.store.upload(&local_path, &format!("{}/receipt.pdf", order.id))?;
        self.store.set_public(&handle)?;
        let url = self.store.public_url(&handle);
        info!("order {} receipt published via {} at {}", order.id, self.store.name(), url);
        Ok(url)
    }
}

fn font_faces() -> FontFaces {
    FontFaces {
        normal: "./fonts/AvenirNext/regular.ttf".to_string(),
        bold: "./fonts/AvenirNext/bold.ttf".to_string(),
        italic: "./fonts/AvenirNext/italic.ttf".to_string(),
    }
}

/// Local timestamp in the business's home offset (UTC-6), e.g.
/// `2024-01-01 10:00am`.
fn default_timestamp() -> String {
    let home = FixedOffset::west_opt(6 * 3600).expect("constant offset is in range");
    Utc::now().with_timezone(&home).format("%Y-%m-%d %I:%M%P").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_render_core::RecordingBackend;
    use receipt_traits::{InMemoryObjectStore, StorageError};
    use std::sync::Arc;

    fn raw_order() -> Value {
        serde_json::from_str(
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
        .unwrap()
    }

    fn composer(
        store: Arc<InMemoryObjectStore>,
        output_dir: &std::path::Path,
    ) -> Receipt {
        Receipt::new(ReceiptConfig::default(), Box::new(RecordingBackend::new()), Box::new(store))
            .unwrap()
            .with_output_dir(output_dir)
    }

    #[test]
    fn generates_and_persists_a_receipt() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(InMemoryObjectStore::new("receipts"));
        let receipt = composer(store.clone(), dir.path());

        let url = receipt.generate(&raw_order()).unwrap();
        assert_eq!(url, "memory://receipts/42/receipt.pdf");

        // Local artifact with deterministic name.
        let artifact = std::fs::read_to_string(dir.path().join("receipt-42.pdf")).unwrap();
        assert!(artifact.contains("text[59] Receipt"));
        assert!(artifact.contains("| Widget A | 2 | $3.5 | $7.0 |"));
        assert!(artifact.contains("$6.00"));
        assert!(artifact.contains("PAID"));

        // Uploaded, made public, same bytes.
        assert!(store.is_public("42/receipt.pdf"));
        assert_eq!(store.object("42/receipt.pdf").unwrap(), artifact.as_bytes());
    }

    #[test]
    fn incomplete_config_fails_before_any_work() {
        let config = ReceiptConfig { storage_bucket: String::new(), ..Default::default() };
        let result = Receipt::new(
            config,
            Box::new(RecordingBackend::new()),
            Box::new(InMemoryObjectStore::new("receipts")),
        );
        assert!(matches!(result, Err(ReceiptError::Config(_))));
    }

    #[test]
    fn invalid_data_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(InMemoryObjectStore::new("receipts"));
        let receipt = composer(store.clone(), dir.path());

        let err = receipt.generate(&serde_json::json!({"customerName": "Jane"})).unwrap_err();
        assert!(matches!(err, ReceiptError::Data(_)));
        assert!(store.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn failed_upload_aborts_with_error() {
        #[derive(Debug)]
        struct RefusingStore;
        impl ObjectStore for RefusingStore {
            fn upload(
                &self,
                _local: &std::path::Path,
                remote_path: &str,
            ) -> Result<receipt_traits::ObjectHandle, StorageError> {
                Err(StorageError::UploadFailed {
                    path: remote_path.to_string(),
                    message: "connection reset".to_string(),
                })
            }
            fn set_public(
                &self,
                _handle: &receipt_traits::ObjectHandle,
            ) -> Result<(), StorageError> {
                Ok(())
            }
            fn public_url(&self, _handle: &receipt_traits::ObjectHandle) -> String {
                String::new()
            }
            fn name(&self) -> &'static str {
                "RefusingStore"
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let receipt = Receipt::new(
            ReceiptConfig::default(),
            Box::new(RecordingBackend::new()),
            Box::new(RefusingStore),
        )
        .unwrap()
        .with_output_dir(dir.path());

        let err = receipt.generate(&raw_order()).unwrap_err();
        assert!(matches!(err, ReceiptError::Storage(_)));
    }

    #[test]
    fn default_timestamp_shape() {
        let stamp = default_timestamp();
        // e.g. "2026-08-06 03:15pm"
        assert_eq!(stamp.len(), 18);
        assert!(stamp.ends_with("am") || stamp.ends_with("pm"));
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
    }
}
