use log::{debug, error};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::client::state::{FormState, SubmitBlocked};
use crate::model::{RecipeRequest, RecipeResponse};
use crate::server::GENERATE_RECIPE_PATH;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5001";

/// Errors seen by the form when asking the server for a recipe
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request could not be sent or the body could not be decoded
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the recipe server
pub struct RecipeClient {
    client: Client,
    base_url: String,
}

impl RecipeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        RecipeClient {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn generate(&self, request: &RecipeRequest) -> Result<RecipeResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, GENERATE_RECIPE_PATH))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: Option<Value> = response.json().await.ok();
            debug!("Error body from server: {:?}", body);

            let message = body
                .as_ref()
                .and_then(|b| b["error"].as_str())
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP error! Status: {}", status.as_u16()));

            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<RecipeResponse>().await?)
    }
}

impl Default for RecipeClient {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

/// Run one submission from the form: begin, call the server, record the outcome.
///
/// A blocked submission makes no request.
pub async fn submit(state: FormState, client: &RecipeClient) -> Result<FormState, SubmitBlocked> {
    let (loading, request) = state.begin_submit()?;
    Ok(complete(loading, &request, client).await)
}

/// Second half of a submission, for callers that render the loading state themselves
pub async fn complete(
    loading: FormState,
    request: &RecipeRequest,
    client: &RecipeClient,
) -> FormState {
    match client.generate(request).await {
        Ok(recipe) => loading.finish_success(recipe),
        Err(e) => {
            error!("Error fetching recipe: {}", e);
            loading.finish_failure(e.to_string())
        }
    }
}
