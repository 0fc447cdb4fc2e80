use super::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/unified_chat", post(handlers::unified_chat_handler))
        .route("/submit_feedback", post(handlers::submit_feedback_handler))
        .route("/chat", post(handlers::chat_handler))
        .route("/optimize_prompt", post(handlers::optimize_prompt_handler))
        .route(
            "/optimize_and_compare",
            post(handlers::optimize_and_compare_handler),
        )
        .route("/feedback", post(handlers::feedback_handler))
        .route(
            "/upload",
            post(handlers::upload_handler).layer(DefaultBodyLimit::max(10 * 1024 * 1024)),
        )
        .route("/ask", post(handlers::ask_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
