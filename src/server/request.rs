use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::error::RecipeError;
use crate::model::RecipeType;

/// Body of `POST /api/generate-recipe` before validation.
///
/// Fields are kept as raw JSON so that presence can be checked the way form
/// clients expect: `null`, `false`, `0` and `""` all count as missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeBody {
    #[serde(default)]
    pub ingredients: Option<Value>,
    #[serde(default)]
    pub prep_time: Option<Value>,
    #[serde(default)]
    pub servings: Option<Value>,
    #[serde(default)]
    pub recipe_type: Option<Value>,
}

/// A request whose four fields are present, ready for prompt assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub ingredients: String,
    pub prep_time: String,
    pub servings: String,
    pub recipe_type: RecipeType,
}

impl GenerateRecipeBody {
    /// Decode the raw HTTP body.
    ///
    /// A body that is empty or not sent as JSON decodes to no fields at all,
    /// so it fails validation with `MissingField`. A JSON body that does not
    /// parse is `InvalidBody`.
    pub fn from_http(content_type: Option<&str>, bytes: &[u8]) -> Result<Self, RecipeError> {
        if !content_type.is_some_and(is_json_content_type)
            || bytes.iter().all(u8::is_ascii_whitespace)
        {
            return Ok(Self::default());
        }

        Json::<Self>::from_bytes(bytes)
            .map(|Json(body)| body)
            .map_err(|rejection| RecipeError::InvalidBody(rejection.body_text()))
    }

    pub fn validate(&self) -> Result<ValidatedRequest, RecipeError> {
        let ingredients = present(&self.ingredients).ok_or(RecipeError::MissingField)?;
        let prep_time = present(&self.prep_time).ok_or(RecipeError::MissingField)?;
        let servings = present(&self.servings).ok_or(RecipeError::MissingField)?;
        let recipe_type = present(&self.recipe_type).ok_or(RecipeError::MissingField)?;

        let recipe_type = recipe_type
            .parse::<RecipeType>()
            .map_err(RecipeError::UnknownRecipeType)?;

        Ok(ValidatedRequest {
            ingredients,
            prep_time,
            servings,
            recipe_type,
        })
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

/// Prompt text for a field, or `None` when the value is missing or falsy
fn present(value: &Option<Value>) -> Option<String> {
    match value.as_ref()? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
