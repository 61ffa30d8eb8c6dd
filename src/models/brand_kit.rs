//! Brand kit model matching the JSON document produced by the AI provider.
//!
//! Every block defaults when missing so a partially filled reply still decodes.

use serde::{Deserialize, Serialize};

/// One palette entry. Identity inside a kit is the `hex` value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandColor {
    pub name: String,
    pub hex: String,
    pub usage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSpec {
    pub name: String,
    pub weight: String,
    pub style: String,
}

/// Heading/body font pairing with the designer's rationale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandFonts {
    pub heading: FontSpec,
    pub body: FontSpec,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandVoice {
    pub tone: String,
    pub taglines: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoDirection {
    pub concept: String,
    pub style: String,
    pub elements: Vec<String>,
}

/// Image sizes for one social network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialPlatform {
    pub name: String,
    pub profile_size: String,
    pub cover_size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialMedia {
    pub profile_guidelines: String,
    pub cover_guidelines: String,
    pub color_applications: Vec<String>,
    pub platforms: Vec<SocialPlatform>,
}

/// The full identity kit for one business. Normally carries five colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandKit {
    pub colors: Vec<BrandColor>,
    pub fonts: BrandFonts,
    pub brand_voice: BrandVoice,
    pub logo_direction: LogoDirection,
    pub social_media: SocialMedia,
}
