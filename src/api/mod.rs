//! Transport layer: axum router, endpoint handlers, error mapping.

pub mod endpoints;
pub mod error;
pub mod router;

use std::sync::Arc;

use crate::config::Config;

/// Shared handler state, generic over the completion client so tests can
/// run the real router against a mock gateway.
pub struct AppState<C> {
    pub client: Arc<C>,
    pub config: Arc<Config>,
}

impl<C> AppState<C> {
    pub fn new(client: C, config: Config) -> Self {
        Self {
            client: Arc::new(client),
            config: Arc::new(config),
        }
    }
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            config: Arc::clone(&self.config),
        }
    }
}
