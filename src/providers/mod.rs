mod google;
mod prompt;

pub use google::{GoogleProvider, DEFAULT_GOOGLE_BASE_URL, DEFAULT_GOOGLE_MODEL};
pub use prompt::{
    build_recipe_prompt, diet_constraint, NON_VEGETARIAN_MARKER, RECIPE_PROMPT_TEMPLATE,
    VEGETARIAN_CONSTRAINT,
};

use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by a generation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request could not be sent or the reply could not be read
    #[error("Request to the generation provider failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with an error object
    #[error("Generation provider error ({code}): {message}")]
    Api { code: i64, message: String },

    /// The reply carried no completion text
    #[error("Failed to extract content from the provider response. Response: {0}")]
    MissingContent(String),
}

/// A single-shot text completion service
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Send one prompt and return the complete completion text
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
