//! # Application Configuration
//!
//! Defines the configuration for `promptpal-server` and the logic for
//! loading it from an optional `config.yml` plus environment-variable
//! overrides. Every field has a default, so the server starts with no
//! configuration files at all.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    General(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The path to the SQLite database file.
    #[serde(default = "default_db_url")]
    pub db_url: String,
    /// The text-generation backend.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// The text-embedding backend.
    #[serde(default)]
    pub embedding: EmbeddingConfig,
}

fn default_port() -> u16 {
    8000
}

fn default_db_url() -> String {
    "db/promptpal.db".to_string()
}

/// Configuration for the generation model endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// An Ollama-compatible `/api/generate` URL.
    #[serde(default = "default_generation_api_url")]
    pub api_url: String,
    #[serde(default = "default_generation_model")]
    pub model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_url: default_generation_api_url(),
            model: default_generation_model(),
        }
    }
}

fn default_generation_api_url() -> String {
    "http://localhost:11434/api/generate".to_string()
}

fn default_generation_model() -> String {
    "mistral".to_string()
}

/// Configuration for the embedding model endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct EmbeddingConfig {
    /// An OpenAI-compatible `/v1/embeddings` URL.
    #[serde(default = "default_embedding_api_url")]
    pub api_url: String,
    #[serde(default = "default_embedding_model")]
    pub model_name: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_url: default_embedding_api_url(),
            model_name: default_embedding_model(),
            api_key: None,
        }
    }
}

fn default_embedding_api_url() -> String {
    "http://localhost:11434/v1/embeddings".to_string()
}

fn default_embedding_model() -> String {
    "all-minilm".to_string()
}

/// Loads the application configuration.
///
/// Layering, lowest priority first: serde defaults, then `config.yml` (the
/// given path, or `./config.yml` when present), then environment variables
/// prefixed with `PROMPTPAL` (e.g. `PROMPTPAL_PORT`,
/// `PROMPTPAL_GENERATION__API_URL`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    let config_path = config_path_override.unwrap_or("config.yml");
    if std::path::Path::new(config_path).exists() {
        info!("Loading configuration from '{config_path}'.");
        builder = builder.add_source(File::new(config_path, FileFormat::Yaml));
    }

    let settings = builder
        .add_source(
            Environment::with_prefix("PROMPTPAL")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    // serde defaults fill any field the sources left unset.
    let config: AppConfig = settings.try_deserialize()?;
    Ok(config)
}
