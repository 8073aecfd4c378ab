//! Input descriptor: which profit center to read and which resources to fetch.
//!
//! ```json
//! {
//!   "ProfitCenter": {
//!     "ControllingArea": "1000",
//!     "ProfitCenter": "YB200",
//!     "Text": { "Language": "EN", "ProfitCenterName": "Finance" }
//!   },
//!   "accepter": ["Header"]
//! }
//! ```
//!
//! Other top-level properties are ignored.

use crate::model::{ProfitCenterKey, ProfitCenterTextKey, RequestedResourceSet};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct InputDescriptor {
    #[serde(rename = "ProfitCenter")]
    pub profit_center: ProfitCenterInput,

    /// Names of the resources to fetch; absent, `null` or empty means all.
    #[serde(default, alias = "Accepter")]
    pub accepter: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfitCenterInput {
    pub controlling_area: String,
    pub profit_center: String,
    #[serde(default)]
    pub text: TextInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TextInput {
    pub language: String,
    pub profit_center_name: String,
}

impl InputDescriptor {
    pub fn key(&self) -> ProfitCenterKey {
        ProfitCenterKey::new(
            &self.profit_center.controlling_area,
            &self.profit_center.profit_center,
        )
    }

    pub fn text_key(&self) -> ProfitCenterTextKey {
        ProfitCenterTextKey::new(
            &self.profit_center.text.language,
            &self.profit_center.text.profit_center_name,
        )
    }

    pub fn requested(&self) -> RequestedResourceSet {
        RequestedResourceSet::from_names(self.accepter.iter().flatten())
    }
}

/// Decodes a descriptor from JSON bytes.
pub fn parse_descriptor(raw: &[u8]) -> Result<InputDescriptor> {
    serde_json::from_slice(raw).context("invalid input descriptor")
}

/// Reads and decodes the descriptor at `path`.
pub fn read_descriptor(path: &Path) -> Result<InputDescriptor> {
    debug!(path = %path.display(), "Reading input descriptor");
    let raw = std::fs::read(path)
        .with_context(|| format!("failed to read input descriptor {}", path.display()))?;
    parse_descriptor(&raw).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Resource;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "ConnectionKey": "SAP",
        "ProfitCenter": {
            "ControllingArea": "1000",
            "ProfitCenter": "YB200",
            "Text": { "Language": "EN", "ProfitCenterName": "Finance" }
        },
        "accepter": ["Header"]
    }"#;

    #[test]
    fn reads_descriptor_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let descriptor = read_descriptor(file.path()).unwrap();
        assert_eq!(descriptor.key(), ProfitCenterKey::new("1000", "YB200"));
        assert_eq!(descriptor.text_key(), ProfitCenterTextKey::new("EN", "Finance"));
        assert_eq!(
            descriptor.requested().iter().collect::<Vec<_>>(),
            vec![Resource::Header]
        );
    }

    #[test]
    fn missing_or_null_accepter_selects_everything() {
        let missing = parse_descriptor(
            br#"{"ProfitCenter":{"ControllingArea":"1000","ProfitCenter":"YB200"}}"#,
        )
        .unwrap();
        assert_eq!(missing.requested(), RequestedResourceSet::all());
        assert_eq!(missing.text_key(), ProfitCenterTextKey::new("", ""));

        let null = parse_descriptor(
            br#"{"ProfitCenter":{"ControllingArea":"1000","ProfitCenter":"YB200"},"accepter":null}"#,
        )
        .unwrap();
        assert_eq!(null.requested(), RequestedResourceSet::all());
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = read_descriptor(Path::new("/nonexistent/descriptor.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/descriptor.json"));
    }

    #[test]
    fn malformed_descriptor_is_an_error() {
        assert!(parse_descriptor(br#"{"ProfitCenter": 1}"#).is_err());
    }
}
