//! Shared application state.

use std::sync::Arc;

use crate::auth::{KeyValidator, StaticKeyValidator};
use crate::config::ServerConfig;

/// State shared across request handlers.
///
/// Deliberately small: each analysis run builds its own reader and detector,
/// so concurrent requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub validator: Arc<dyn KeyValidator>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let validator = Arc::new(StaticKeyValidator::new(config.api_key.clone()));
        Self { config, validator }
    }
}
