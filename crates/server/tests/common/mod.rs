#![allow(unused)]
//! # Common Test Utilities
//!
//! The `TestApp` harness spawns the real server on a random port, backed by
//! a temporary SQLite file and an `httpmock::MockServer` standing in for
//! both the generation and embeddings upstreams.

use anyhow::Result;
use httpmock::MockServer;
use promptpal_server::{
    config::{AppConfig, EmbeddingConfig, GenerationConfig},
    router::create_router,
    state::{build_app_state, AppState},
};
use reqwest::Client;
use tempfile::NamedTempFile;
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _db_file: NamedTempFile,
    _server_handle: JoinHandle<()>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let db_file = NamedTempFile::new()?;

        let config = AppConfig {
            port: 0,
            db_url: db_file.path().to_str().unwrap().to_string(),
            generation: GenerationConfig {
                api_url: mock_server.url("/api/generate"),
                model: "mock-chat-model".to_string(),
            },
            embedding: EmbeddingConfig {
                api_url: mock_server.url("/v1/embeddings"),
                model_name: "mock-embedding-model".to_string(),
                api_key: None,
            },
        };

        let app_state = build_app_state(config).await?;
        let app = create_router(app_state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        let address = format!("http://127.0.0.1:{port}");

        let server_handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {e}");
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state,
            _db_file: db_file,
            _server_handle: server_handle,
        })
    }
}
