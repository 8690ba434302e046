use chef_ai::config::DEFAULT_LOG_FILTER;
use chef_ai::providers::{GoogleProvider, LlmProvider};
use chef_ai::server::{self, AppState};
use chef_ai::ServerConfig;
use log::{error, info};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("FATAL ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let provider: Arc<dyn LlmProvider> = Arc::new(GoogleProvider::with_base_url(
        config.api_key().to_string(),
        config.base_url.clone(),
        config.model.clone(),
    ));
    info!(
        "Generation provider '{}' initialized with model {}",
        provider.provider_name(),
        config.model
    );

    let listener = TcpListener::bind(config.bind_address()).await?;
    server::serve(listener, AppState::new(provider)).await?;

    Ok(())
}
