//! Structural difference between two brand kits.

use serde::{Deserialize, Serialize};

use super::BrandColor;

/// A color whose hex stayed the same while its name or usage changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorChange {
    pub old: BrandColor,
    pub new: BrandColor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ColorDiff {
    pub added: Vec<BrandColor>,
    pub removed: Vec<BrandColor>,
    pub changed: Vec<ColorChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FontDiff {
    pub heading_changed: bool,
    pub body_changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrandVoiceDiff {
    pub tone_changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_tone: Option<String>,
    pub taglines_added: Vec<String>,
    pub taglines_removed: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LogoDirectionDiff {
    pub concept_changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_concept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_concept: Option<String>,
    pub elements_added: Vec<String>,
    pub elements_removed: Vec<String>,
}

/// Field-by-field comparison result. The social media block is never compared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrandDiff {
    pub colors: ColorDiff,
    pub fonts: FontDiff,
    pub brand_voice: BrandVoiceDiff,
    pub logo_direction: LogoDirectionDiff,
    pub has_changes: bool,
}
