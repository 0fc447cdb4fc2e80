//! # General Handlers

/// The root handler.
pub async fn root() -> &'static str {
    "promptpal server is running."
}

/// The health check handler.
pub async fn health_check() -> &'static str {
    "OK"
}
