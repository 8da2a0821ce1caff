//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::dummyjson::{UpstreamClient, UpstreamError};
use crate::services::{CartService, IdentityVerifier};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; owns the upstream client, the identity
/// verifier, and the in-process cart service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    upstream: UpstreamClient,
    verifier: IdentityVerifier,
    carts: CartService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self, UpstreamError> {
        let upstream = UpstreamClient::new(&config)?;
        let verifier = IdentityVerifier::new(upstream.clone());
        let carts = CartService::new(upstream.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                upstream,
                verifier,
                carts,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the upstream API client.
    #[must_use]
    pub fn upstream(&self) -> &UpstreamClient {
        &self.inner.upstream
    }

    /// Get a reference to the identity verifier.
    #[must_use]
    pub fn verifier(&self) -> &IdentityVerifier {
        &self.inner.verifier
    }

    /// Get a reference to the cart service.
    #[must_use]
    pub fn carts(&self) -> &CartService {
        &self.inner.carts
    }
}
