//! Prompt template and reply parsing for brand kit generation.

use crate::errors::AppError;
use crate::models::{BrandKit, GenerateRequest};

const KIT_SCHEMA: &str = r##"{
  "colors": [
    {
      "name": "Color name (e.g., 'Deep Ocean')",
      "hex": "#HEXCODE",
      "usage": "Brief usage description (e.g., 'Primary brand color for headers and CTAs')"
    }
  ],
  "fonts": {
    "heading": {
      "name": "Font name from Google Fonts",
      "weight": "e.g., Bold (700)",
      "style": "e.g., Sans-serif, modern and clean"
    },
    "body": {
      "name": "Font name from Google Fonts",
      "weight": "e.g., Regular (400)",
      "style": "e.g., Sans-serif, highly readable"
    },
    "reasoning": "Why these fonts pair well together and suit this brand"
  },
  "brandVoice": {
    "tone": "2-4 word tone description (e.g., 'Warm, Professional, Inviting')",
    "taglines": ["tagline1", "tagline2", "tagline3"],
    "description": "2-3 sentence description of the brand voice and how to use it"
  },
  "logoDirection": {
    "concept": "Detailed description of the logo concept",
    "style": "Description of the visual style (geometric, organic, typographic, etc.)",
    "elements": ["element1", "element2", "element3", "element4"]
  },
  "socialMedia": {
    "profileGuidelines": "How to apply the brand to profile images",
    "coverGuidelines": "How to apply the brand to cover/banner images",
    "colorApplications": [
      "Specific color application tip 1",
      "Specific color application tip 2",
      "Specific color application tip 3"
    ],
    "platforms": [
      { "name": "Instagram", "profileSize": "320x320px", "coverSize": "1080x1080px (feed)" },
      { "name": "Twitter/X", "profileSize": "400x400px", "coverSize": "1500x500px" },
      { "name": "LinkedIn", "profileSize": "400x400px", "coverSize": "1584x396px" },
      { "name": "Facebook", "profileSize": "170x170px", "coverSize": "820x312px" }
    ]
  }
}"##;

const REQUIREMENTS: &str = "Requirements:
- Generate exactly 5 colors that work harmoniously together
- Include a primary, secondary, accent, background/neutral, and text color
- All hex codes must be valid 6-digit hex colors
- Font names must be real Google Fonts
- Taglines should be creative and memorable
- Logo direction should be detailed enough for a designer to work from
- Tailor everything to the specific business and industry";

/// Build the user prompt for one generation request.
pub fn build_prompt(request: &GenerateRequest) -> String {
    format!(
        "You are a world-class brand identity designer. Generate a complete brand identity kit for the following business.

Business Name: {name}
Industry: {industry}
Description: {description}
Style Preference: {style}

Generate a comprehensive brand kit and respond ONLY with valid JSON (no markdown, no code blocks) in this exact structure:

{schema}

{requirements}",
        name = request.business_name.trim(),
        industry = request.industry_or_default(),
        description = request.description.trim(),
        style = request.style_or_default(),
        schema = KIT_SCHEMA,
        requirements = REQUIREMENTS,
    )
}

/// Cut the outermost `{...}` span out of a model reply, if there is one.
pub fn extract_json_object(text: &str) -> &str {
    let text = text.trim();
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Parse the model's text reply into a brand kit.
pub fn parse_brand_kit(text: &str) -> Result<BrandKit, AppError> {
    serde_json::from_str(extract_json_object(text)).map_err(|e| {
        tracing::warn!("Model reply is not a brand kit: {}", e);
        AppError::Upstream("Failed to parse AI response as JSON".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(industry: Option<&str>, style: Option<&str>) -> GenerateRequest {
        GenerateRequest {
            business_name: "Acme Coffee".to_string(),
            industry: industry.map(str::to_string),
            description: "Small-batch roaster".to_string(),
            style: style.map(str::to_string),
        }
    }

    #[test]
    fn test_prompt_fills_inputs_and_defaults() {
        let prompt = build_prompt(&request(None, None));
        assert!(prompt.contains("Business Name: Acme Coffee"));
        assert!(prompt.contains("Industry: Not specified"));
        assert!(prompt.contains("Description: Small-batch roaster"));
        assert!(prompt.contains("Style Preference: Modern"));
        assert!(prompt.contains("\"brandVoice\""));
        assert!(prompt.ends_with("Tailor everything to the specific business and industry"));

        let prompt = build_prompt(&request(Some("Food & Drink"), Some("Vintage")));
        assert!(prompt.contains("Industry: Food & Drink"));
        assert!(prompt.contains("Style Preference: Vintage"));
    }

    #[test]
    fn test_prompt_carries_kit_schema() {
        let prompt = build_prompt(&request(None, None));
        assert!(prompt.contains(r##""hex": "#HEXCODE""##));
        for row in [
            r#"{ "name": "Instagram", "profileSize": "320x320px", "coverSize": "1080x1080px (feed)" }"#,
            r#"{ "name": "Twitter/X", "profileSize": "400x400px", "coverSize": "1500x500px" }"#,
            r#"{ "name": "LinkedIn", "profileSize": "400x400px", "coverSize": "1584x396px" }"#,
            r#"{ "name": "Facebook", "profileSize": "170x170px", "coverSize": "820x312px" }"#,
        ] {
            assert!(prompt.contains(row), "missing platform row: {}", row);
        }
    }

    #[test]
    fn test_extract_from_markdown_fence() {
        let reply = "Here you go:\n```json\n{\"colors\": []}\n```";
        assert_eq!(extract_json_object(reply), "{\"colors\": []}");
    }

    #[test]
    fn test_extract_without_braces_returns_trimmed_text() {
        assert_eq!(extract_json_object("  no json here \n"), "no json here");
    }

    #[test]
    fn test_parse_brand_kit() {
        let kit = parse_brand_kit(
            "```{\"colors\":[{\"name\":\"Ink\",\"hex\":\"#111111\",\"usage\":\"Text\"}]}```",
        )
        .unwrap();
        assert_eq!(kit.colors[0].name, "Ink");

        let err = parse_brand_kit("I cannot help with that").unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
