//! The recipe form: state transitions, the call to the server and rendering.

pub mod api;
pub mod render;
pub mod state;

pub use api::{complete, submit, ClientError, RecipeClient, DEFAULT_SERVER_URL};
pub use render::Screen;
pub use state::{FormState, SubmitBlocked};
