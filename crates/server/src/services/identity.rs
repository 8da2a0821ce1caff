//! Identity verification against the upstream identity authority.
//!
//! Every protected request triggers a fresh `GET /auth/me` round trip; there
//! is deliberately no local caching, so a revoked or expired token stops
//! working on the very next request.

use thiserror::Error;
use tracing::instrument;

use shopfront_core::CustomerId;

use crate::dummyjson::{UpstreamClient, UpstreamError};

/// Errors that can occur while verifying a bearer credential.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// No bearer credential was supplied.
    #[error("missing bearer credential")]
    MissingCredential,

    /// The authority rejected the credential as expired or invalid.
    #[error("session expired or invalid")]
    CredentialExpired,

    /// Verification failed for any other reason (transport, upstream fault).
    #[error("credential verification failed")]
    VerificationFailed(#[source] UpstreamError),
}

/// Verifies bearer credentials and derives the authenticated customer.
#[derive(Clone)]
pub struct IdentityVerifier {
    upstream: UpstreamClient,
}

impl IdentityVerifier {
    /// Create a new verifier backed by the upstream identity authority.
    #[must_use]
    pub const fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    /// Verify a bearer credential and return the customer it belongs to.
    ///
    /// The returned [`CustomerId`] comes from the authority's identity
    /// record, never from the request itself.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` without any upstream call if `credential`
    /// is absent or empty, `CredentialExpired` if the authority answers 401,
    /// and `VerificationFailed` for every other failure.
    #[instrument(skip(self, credential))]
    pub async fn verify(&self, credential: Option<&str>) -> Result<CustomerId, VerifyError> {
        let token = credential
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(VerifyError::MissingCredential)?;

        match self.upstream.current_user(token).await {
            Ok(identity) => Ok(CustomerId::from(identity.id)),
            Err(UpstreamError::Status(status)) if status == reqwest::StatusCode::UNAUTHORIZED => {
                Err(VerifyError::CredentialExpired)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Credential verification failed");
                Err(VerifyError::VerificationFailed(e))
            }
        }
    }
}
