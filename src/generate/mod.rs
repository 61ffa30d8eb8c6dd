//! Brand kit generation through the Anthropic Messages API.
//!
//! One plain request per generation: no retries, no streaming.

mod prompt;

use prompt::{build_prompt, parse_brand_kit};

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{BrandKit, GenerateRequest};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 2048;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Client for the AI provider that produces brand kits.
pub struct BrandGenerator {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl BrandGenerator {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder().timeout(config.http_timeout).build()?;

        Ok(Self {
            client,
            api_url: config.anthropic_api_url.clone(),
            api_key: config.anthropic_api_key.clone(),
            model: config.anthropic_model.clone(),
        })
    }

    /// Ask the model for a brand kit matching `request`.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<BrandKit, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Upstream("ANTHROPIC_API_KEY is not configured".to_string()))?;

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: build_prompt(request),
            }],
        };

        tracing::debug!(
            business = %request.business_name,
            model = %self.model,
            "Requesting brand kit"
        );

        let response: MessagesResponse = self
            .client
            .post(format!("{}/v1/messages", self.api_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = response
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| AppError::Upstream("No text response from AI".to_string()))?;

        parse_brand_kit(&text)
    }
}
