use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{debug, error, info};

use crate::error::RecipeError;
use crate::server::request::GenerateRecipeBody;
use crate::server::AppState;

/// `POST /api/generate-recipe`
///
/// Responds 200 with the recipe object, 400 `{error}` when the body is not
/// JSON, a field is missing or the recipe type is unknown, and 500
/// `{error, rawResponse}` or `{error, details}` when generation fails.
pub async fn generate_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    bytes: Result<Bytes, BytesRejection>,
) -> Response {
    info!("Received request at /api/generate-recipe");

    let body = match decode_body(&headers, bytes) {
        Ok(body) => body,
        Err(e) => {
            error!("Rejected request body: {}", e);
            return e.into_response();
        }
    };
    debug!("Request body: {:?}", body);

    match state.service.generate(&body).await {
        Ok(recipe) => Json(recipe).into_response(),
        Err(e) => e.into_response(),
    }
}

fn decode_body(
    headers: &HeaderMap,
    bytes: Result<Bytes, BytesRejection>,
) -> Result<GenerateRecipeBody, RecipeError> {
    let bytes = bytes.map_err(|rejection| RecipeError::InvalidBody(rejection.body_text()))?;
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    GenerateRecipeBody::from_http(content_type, &bytes)
}
