//! Chef-AI: generate a recipe from the ingredients you have.
//!
//! The [`server`] module exposes `POST /api/generate-recipe`, which builds a
//! prompt from the request, sends it to a generation provider and returns the
//! JSON recipe found in the completion. The [`client`] module is the form that
//! collects the constraints and renders the result.
//!
//! # Example
//! ```no_run
//! use chef_ai::client::{submit, FormState, RecipeClient, Screen};
//!
//! # async fn run() -> Result<(), chef_ai::client::SubmitBlocked> {
//! let state = FormState::default()
//!     .with_ingredients("rice, egg, onion")
//!     .with_servings_input("2");
//!
//! let state = submit(state, &RecipeClient::default()).await?;
//! println!("{}", Screen::from(&state));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod providers;
pub mod server;

pub use crate::config::ServerConfig;
pub use error::{ConfigError, RecipeError};
pub use extract::{extract_json_object, ExtractionError};
pub use model::{IngredientLine, Nutrition, PrepTime, RecipeRequest, RecipeResponse, RecipeType};
pub use providers::{GoogleProvider, LlmProvider, ProviderError};
