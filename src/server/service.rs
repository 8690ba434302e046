use log::{error, info};
use serde_json::Value;
use std::sync::Arc;

use crate::error::RecipeError;
use crate::extract::extract_json_object;
use crate::providers::{build_recipe_prompt, LlmProvider};
use crate::server::request::GenerateRecipeBody;

/// Turns recipe constraints into a recipe by way of the generation provider
pub struct RecipeService {
    provider: Arc<dyn LlmProvider>,
}

impl RecipeService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Validate the request, prompt the provider once and extract the recipe.
    ///
    /// The extracted object is returned as-is; its shape is not checked.
    pub async fn generate(&self, body: &GenerateRecipeBody) -> Result<Value, RecipeError> {
        let request = body.validate().inspect_err(|e| {
            error!("Validation error: {}", e);
        })?;

        let prompt = build_recipe_prompt(
            &request.ingredients,
            &request.prep_time,
            &request.servings,
            request.recipe_type,
        );

        info!(
            "Sending {} prompt to {}",
            request.recipe_type,
            self.provider.provider_name()
        );
        let completion = self.provider.generate(&prompt).await.inspect_err(|e| {
            error!("Error during recipe generation: {}", e);
        })?;
        info!("Received response from {}", self.provider.provider_name());

        match extract_json_object(&completion) {
            Ok(recipe) => {
                info!("Successfully parsed recipe");
                Ok(recipe)
            }
            Err(e) => {
                error!("Error parsing provider response: {}", e);
                error!("Raw response that failed parsing: {}", completion);
                Err(RecipeError::Extraction {
                    source: e,
                    raw_response: completion,
                })
            }
        }
    }
}
