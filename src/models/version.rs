//! Vault models: stored versions and the persisted vault root.

use serde::{Deserialize, Serialize};

use super::BrandKit;

/// Retention cap applied per business name.
pub const MAX_VERSIONS: usize = 5;

/// One immutable snapshot of a brand kit for a business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrandVersion {
    pub id: String,
    /// Sequential per business name, starting at 1
    pub version: u64,
    pub business_name: String,
    pub industry: String,
    pub style: String,
    pub brand_kit: BrandKit,
    /// ISO-8601 creation timestamp (UTC)
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl BrandVersion {
    /// Case-insensitive business name match. Stored casing is left untouched.
    pub fn belongs_to(&self, business_name: &str) -> bool {
        self.business_name.to_lowercase() == business_name.to_lowercase()
    }
}

/// The persisted vault root, stored as a single JSON blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VaultData {
    /// Newest insertion first, across all businesses
    pub versions: Vec<BrandVersion>,
    pub current_version_id: Option<String>,
    #[serde(default = "default_max_versions")]
    pub max_versions: usize,
}

fn default_max_versions() -> usize {
    MAX_VERSIONS
}

impl Default for VaultData {
    fn default() -> Self {
        Self {
            versions: Vec::new(),
            current_version_id: None,
            max_versions: MAX_VERSIONS,
        }
    }
}

/// A version as listed in history views, with its display label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    #[serde(flatten)]
    pub version: BrandVersion,
    pub created_label: String,
}

/// Request body for storing a new version.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVersionRequest {
    pub business_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub style: String,
    pub brand_kit: BrandKit,
    #[serde(default)]
    pub note: Option<String>,
}

/// Request body for marking a version as current.
#[derive(Debug, Clone, Deserialize)]
pub struct SetCurrentRequest {
    pub id: String,
}

/// Query parameters for comparing two stored versions.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareQuery {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionCount {
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResult {
    pub removed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vault_data_persisted_layout() {
        let vault = VaultData::default();
        let json = serde_json::to_value(&vault).unwrap();
        assert_eq!(
            json,
            json!({ "versions": [], "currentVersionId": null, "maxVersions": 5 })
        );
    }

    #[test]
    fn test_note_omitted_when_absent() {
        let version = BrandVersion {
            id: "v_1".to_string(),
            version: 1,
            business_name: "Acme".to_string(),
            industry: "Retail".to_string(),
            style: "Modern".to_string(),
            brand_kit: BrandKit::default(),
            created_at: "2024-05-01T10:00:00.000Z".to_string(),
            note: None,
        };
        let json = serde_json::to_value(&version).unwrap();
        assert!(json.get("note").is_none());
        assert_eq!(json["businessName"], "Acme");
        assert_eq!(json["brandKit"]["colors"], json!([]));
    }

    #[test]
    fn test_belongs_to_ignores_case() {
        let version: BrandVersion = serde_json::from_value(json!({
            "id": "v_1",
            "version": 1,
            "businessName": "Acme Coffee",
            "industry": "",
            "style": "",
            "brandKit": {},
            "createdAt": "2024-05-01T10:00:00.000Z"
        }))
        .unwrap();
        assert!(version.belongs_to("ACME coffee"));
        assert!(!version.belongs_to("Acme"));
    }
}
