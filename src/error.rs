use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractionError;
use crate::providers::ProviderError;

/// Message returned when any of the four request fields is missing
pub const MISSING_FIELDS_MESSAGE: &str =
    "Please provide ingredients, prep time, servings, and recipe type.";

/// Message returned when the completion holds no usable JSON object
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse recipe from AI response.";

/// Message returned for provider and internal failures
pub const INTERNAL_FAILURE_MESSAGE: &str =
    "Failed to generate recipe due to an internal server error.";

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// One of ingredients, prepTime, servings or recipeType is absent or empty
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingField,

    /// The request body is not valid JSON for this endpoint
    #[error("Invalid JSON request body: {0}")]
    InvalidBody(String),

    /// recipeType is neither "veg" nor "non-veg"
    #[error("Unrecognized recipe type '{0}'. Expected 'veg' or 'non-veg'.")]
    UnknownRecipeType(String),

    /// The completion could not be turned into a JSON object
    #[error("{source}")]
    Extraction {
        source: ExtractionError,
        raw_response: String,
    },

    /// The generation provider failed
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// Anything else that went wrong inside the endpoint
    #[error("{0}")]
    Unexpected(String),
}

impl RecipeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecipeError::MissingField
            | RecipeError::InvalidBody(_)
            | RecipeError::UnknownRecipeType(_) => StatusCode::BAD_REQUEST,
            RecipeError::Extraction { .. }
            | RecipeError::Provider(_)
            | RecipeError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            RecipeError::MissingField
            | RecipeError::InvalidBody(_)
            | RecipeError::UnknownRecipeType(_) => json!({ "error": self.to_string() }),
            RecipeError::Extraction { raw_response, .. } => json!({
                "error": PARSE_FAILURE_MESSAGE,
                "rawResponse": raw_response,
            }),
            RecipeError::Provider(_) | RecipeError::Unexpected(_) => json!({
                "error": INTERNAL_FAILURE_MESSAGE,
                "details": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

/// Errors raised while loading the server configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The provider credential is not set
    #[error("GEMINI_API_KEY is not defined in the environment or .env file")]
    MissingApiKey,

    /// The configuration sources could not be read or deserialized
    #[error("Configuration error: {0}")]
    Source(#[from] config::ConfigError),
}
