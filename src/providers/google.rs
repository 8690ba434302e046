use crate::providers::{LlmProvider, ProviderError};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

pub const DEFAULT_GOOGLE_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GOOGLE_MODEL: &str = "gemini-2.0-flash";

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider against the public endpoint
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_GOOGLE_BASE_URL.to_string(), model)
    }

    /// Create a provider for a custom or proxy endpoint
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GoogleProvider {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "contents": [{
                    "parts": [{
                        "text": prompt
                    }]
                }]
            }))
            .send()
            .await?;

        let response_body: Value = response.json().await?;
        debug!("Google Gemini response: {:?}", response_body);

        // Check for API error response
        if let Some(error) = response_body.get("error") {
            return Err(ProviderError::Api {
                code: error["code"].as_i64().unwrap_or(0),
                message: error["message"]
                    .as_str()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        let completion = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                ProviderError::MissingContent(
                    serde_json::to_string_pretty(&response_body)
                        .unwrap_or_else(|_| response_body.to_string()),
                )
            })?
            .to_string();

        Ok(completion)
    }
}
