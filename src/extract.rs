use serde_json::Value;
use thiserror::Error;

/// Reasons a completion could not be turned into a JSON object
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The text has no `{` or no `}`
    #[error("Could not find JSON object in the AI response.")]
    NoJsonObject,

    /// The span between the first `{` and the last `}` is not valid JSON
    #[error("Invalid JSON in the AI response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Extract the JSON object embedded in a model completion.
///
/// Takes everything from the first `{` to the last `}` inclusive and parses it,
/// so prose or markdown fences around the object are ignored. Nested braces in
/// surrounding prose will break this; callers get the error and the raw text.
pub fn extract_json_object(text: &str) -> Result<Value, ExtractionError> {
    let start = text.find('{').ok_or(ExtractionError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ExtractionError::NoJsonObject)?;

    // A closing brace before the opening one leaves an empty span.
    let span = text.get(start..=end).unwrap_or_default();

    Ok(serde_json::from_str(span)?)
}
