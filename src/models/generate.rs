//! Request models for the generation and tracking routes.

use serde::{Deserialize, Serialize};

use super::BrandVersion;

/// Request body for generating a new brand kit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub style: Option<String>,
}

impl GenerateRequest {
    pub fn industry_or_default(&self) -> &str {
        non_blank(self.industry.as_deref()).unwrap_or("Not specified")
    }

    pub fn style_or_default(&self) -> &str {
        non_blank(self.style.as_deref()).unwrap_or("Modern")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Response body of a successful generation: the stored version.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub version: BrandVersion,
}

/// Acknowledgement returned by the tracking route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAck {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_blank_optional_fields() {
        let request: GenerateRequest = serde_json::from_str(
            r#"{"businessName":"Acme","description":"Coffee","industry":"  "}"#,
        )
        .unwrap();
        assert_eq!(request.industry_or_default(), "Not specified");
        assert_eq!(request.style_or_default(), "Modern");

        let request: GenerateRequest = serde_json::from_str(
            r#"{"businessName":"Acme","description":"Coffee","industry":"Food","style":"Playful"}"#,
        )
        .unwrap();
        assert_eq!(request.industry_or_default(), "Food");
        assert_eq!(request.style_or_default(), "Playful");
    }
}
