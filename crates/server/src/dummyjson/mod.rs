//! Client for the upstream product/identity API (DummyJSON-shaped).
//!
//! One `reqwest`-backed client covers both upstream concerns:
//!
//! - **Catalog**: product listing and per-product lookup
//! - **Identity**: login and bearer-token verification (`GET /auth/me`)
//!
//! Responses are read as text first and parsed with `serde_json` so parse
//! failures can be diagnosed from logs. All failures surface as a typed
//! [`UpstreamError`]; callers translate those at their own boundary and
//! never expose a raw transport error to the client.

pub mod types;

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use shopfront_core::ProductId;

use crate::config::ServerConfig;
use types::{Identity, LoginCredentials, LoginSession, Product, ProductsPage};

/// Fields requested from the catalog; the upstream always includes `id`.
const PRODUCT_FIELDS: &str = "title,description,price,thumbnail";

/// Errors that can occur when calling the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream responded with a non-success status.
    #[error("upstream returned {0}")]
    Status(StatusCode),

    /// Requested resource does not exist upstream.
    #[error("not found: {0}")]
    NotFound(String),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the upstream product/identity API.
///
/// Cheaply cloneable; the underlying connection pool is shared.
#[derive(Clone)]
pub struct UpstreamClient {
    inner: Arc<UpstreamClientInner>,
}

struct UpstreamClientInner {
    client: reqwest::Client,
    base_url: url::Url,
}

impl UpstreamClient {
    /// Create a new upstream client from server configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(UpstreamClientInner {
                client,
                base_url: config.upstream_url.clone(),
            }),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        format!("{base}{path}")
    }

    /// Read a response body as text and parse it as JSON.
    async fn parse_body<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, UpstreamError> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %text.chars().take(500).collect::<String>(),
                "Failed to parse upstream response"
            );
            UpstreamError::Parse(e)
        })
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// List catalog products with the fields the storefront needs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, UpstreamError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("/products"))
            .query(&[("limit", "100"), ("select", PRODUCT_FIELDS)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let page: ProductsPage = Self::parse_body(response).await?;
        Ok(page.products)
    }

    /// Look up a single catalog product by ID.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::NotFound` if the product does not exist, or
    /// another variant if the request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, UpstreamError> {
        let response = self
            .inner
            .client
            .get(self.endpoint(&format!("/products/{id}")))
            .query(&[("select", PRODUCT_FIELDS)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound(format!("product {id}")));
        }
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        Self::parse_body(response).await
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Exchange credentials for an upstream session.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Status` with the upstream status on rejection;
    /// the caller decides how to classify it.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginSession, UpstreamError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("/auth/login"))
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        Self::parse_body(response).await
    }

    /// Fetch the identity record for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Status` with the upstream status if the token
    /// is rejected; the verifier classifies 401 as an expired credential.
    #[instrument(skip(self, token))]
    pub async fn current_user(&self, token: &str) -> Result<Identity, UpstreamError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("/auth/me"))
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        Self::parse_body(response).await
    }
}
