//! # API Route Handlers
//!
//! Organizes all the Axum route handlers for `promptpal-server`. The
//! handlers are split by functionality: the unified chat router, the legacy
//! single-purpose endpoints, and document upload/Q&A.

pub mod chat;
pub mod documents;
pub mod general;
pub mod legacy;

// Re-export all handlers so the router can reach them under one path.
pub use chat::*;
pub use documents::*;
pub use general::*;
pub use legacy::*;
