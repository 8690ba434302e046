use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, Map};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::providers::{DEFAULT_GOOGLE_BASE_URL, DEFAULT_GOOGLE_MODEL};

/// Settings for the recipe server
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Google Gemini API key; required
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Gemini model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the Gemini API (for proxies and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// `env_logger` filter used by both binaries when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment variables read by the server, and the setting each one sets.
/// No other variable is consulted.
pub const ENV_VARS: &[(&str, &str)] = &[
    ("GEMINI_API_KEY", "gemini_api_key"),
    ("PORT", "port"),
    ("CHEF_AI_HOST", "host"),
    ("CHEF_AI_MODEL", "model"),
    ("CHEF_AI_BASE_URL", "base_url"),
];

fn default_port() -> u16 {
    5001
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_model() -> String {
    DEFAULT_GOOGLE_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_GOOGLE_BASE_URL.to_string()
}

impl ServerConfig {
    /// Load configuration from the environment and an optional config file
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables listed in [`ENV_VARS`]
    /// 2. A `.env` file in the current directory
    /// 3. chef-ai.toml file in current directory
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        // Variables already set in the process win over the .env file
        dotenv::dotenv().ok();

        let builder = Config::builder()
            .add_source(File::with_name("chef-ai").required(false))
            .add_source(environment(std::env::vars_os().filter_map(|(name, value)| {
                Some((name.into_string().ok()?, value.into_string().ok()?))
            })));

        Self::from_builder(builder)
    }

    /// Build and validate a configuration from prepared sources
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        match self.gemini_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(self),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    /// The API key; present after validation
    pub fn api_key(&self) -> &str {
        self.gemini_api_key.as_deref().unwrap_or_default()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// An environment source holding only the variables in [`ENV_VARS`]
fn environment(vars: impl IntoIterator<Item = (String, String)>) -> Environment {
    let settings: Map<String, String> = vars
        .into_iter()
        .filter_map(|(name, value)| {
            ENV_VARS
                .iter()
                .find(|(var, _)| *var == name)
                .map(|(_, key)| (key.to_string(), value))
        })
        .collect();

    Environment::default()
        .source(Some(settings))
        .try_parsing(true)
}
