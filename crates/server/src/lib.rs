//! Axum HTTP API server.
//!
//! Thin transport layer over `facetrace-core`: multipart video upload in,
//! JSON statistics plus base64-encoded images out.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
