//! Receipt generation settings.
//!
//! Passed explicitly to [`crate::Receipt::new`]; there is no process-wide
//! configuration state. Construction fails if a required field is blank, so
//! an unconfigured composer cannot exist.

use crate::error::ReceiptError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptConfig {
    pub business_name: String,
    pub business_phone: String,
    pub business_email: String,
    pub storage_bucket: String,
    pub storage_project_id: String,
    pub storage_credentials: String,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            business_name: "Business Name".to_string(),
            business_phone: "(000) 111-1234".to_string(),
            business_email: "email@email.com".to_string(),
            storage_bucket: "google-cloud-bucket-name".to_string(),
            storage_project_id: "google-cloud-project".to_string(),
            storage_credentials: "/path/to/credentials".to_string(),
        }
    }
}

impl ReceiptConfig {
    /// Checks that every field a generation depends on is present.
    pub fn validate(&self) -> Result<(), ReceiptError> {
        let required = [
            ("businessName", &self.business_name),
            ("businessPhone", &self.business_phone),
            ("businessEmail", &self.business_email),
            ("storageBucket", &self.storage_bucket),
            ("storageProjectId", &self.storage_project_id),
            ("storageCredentials", &self.storage_credentials),
        ];
        let blank: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| *key)
            .collect();
        if blank.is_empty() {
            Ok(())
        } else {
            Err(ReceiptError::Config(format!(
                "Configuration not set: missing {}",
                blank.join(", ")
            )))
        }
    }
}
