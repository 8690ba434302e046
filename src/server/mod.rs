mod handlers;
pub mod request;
mod service;

pub use handlers::generate_recipe;
pub use request::{GenerateRecipeBody, ValidatedRequest};
pub use service::RecipeService;

use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use log::{error, info};
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::error::RecipeError;
use crate::providers::LlmProvider;

/// Path of the recipe generation endpoint
pub const GENERATE_RECIPE_PATH: &str = "/api/generate-recipe";

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecipeService>,
}

impl AppState {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            service: Arc::new(RecipeService::new(provider)),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(GENERATE_RECIPE_PATH, post(generate_recipe))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// A panic inside a handler still answers with the structured 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown panic".to_string()
    };

    error!("Unexpected failure while handling request: {}", details);
    RecipeError::Unexpected(details).into_response()
}

/// Serve the router on an already bound listener until the process stops
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let address = listener.local_addr()?;
    info!("Server is running and listening on http://{}", address);
    info!("Endpoint available: {}", GENERATE_RECIPE_PATH);

    axum::serve(listener, router(state)).await
}
