//! # Application State
//!
//! Defines the shared application state (`AppState`) and the logic for
//! building it at startup. All shared resources (configuration, the store,
//! and the generation provider) are constructed exactly once here and
//! passed to handlers by reference, never reached through globals.

use crate::config::AppConfig;
use promptpal::{
    types::EmbeddingConfig, GenerationProvider, OllamaProvider, SqliteProvider,
};
use std::sync::Arc;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The SQLite store backing the interaction log and the document index.
    pub store: Arc<SqliteProvider>,
    /// The text-generation provider.
    pub generator: Arc<dyn GenerationProvider>,
}

impl AppState {
    /// The embeddings configuration in the form the library consumes.
    pub fn embedding(&self) -> EmbeddingConfig {
        EmbeddingConfig {
            api_url: self.config.embedding.api_url.clone(),
            model_name: self.config.embedding.model_name.clone(),
            api_key: self.config.embedding.api_key.clone(),
        }
    }
}

/// Builds the shared application state from the configuration.
///
/// Connects to the SQLite database (creating parent directories for
/// file-backed paths), ensures the schema exists, and instantiates the
/// generation provider.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    if config.db_url != ":memory:" {
        if let Some(parent) = std::path::Path::new(&config.db_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let store = SqliteProvider::new(&config.db_url).await?;
    tracing::info!(db_path = %config.db_url, "Initialized local storage provider (SQLite).");
    store.initialize_schema().await?;

    let generator = OllamaProvider::new(
        config.generation.api_url.clone(),
        config.generation.model.clone(),
    )?;

    Ok(AppState {
        config: Arc::new(config),
        store: Arc::new(store),
        generator: Arc::new(generator),
    })
}
