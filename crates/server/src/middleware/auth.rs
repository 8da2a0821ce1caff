//! Authentication gate for protected routes.
//!
//! Provides the [`RequireCustomer`] extractor. Protected handlers receive
//! the verified customer ID only through this extractor, so there is no path
//! by which cart logic runs without a fresh, successful verification for
//! that exact request, and no client-controlled field can shadow the
//! verified identity.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use shopfront_core::CustomerId;

use crate::error::AppError;
use crate::state::AppState;

/// Extractor that requires a verified customer.
///
/// Extracts the bearer credential from the `Authorization` header and
/// verifies it against the upstream identity authority before the handler
/// body runs. On any verifier error the request is rejected with 401 and the
/// handler is never invoked; the response message distinguishes an expired
/// credential from a generic failure.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireCustomer(customer): RequireCustomer,
/// ) -> impl IntoResponse {
///     format!("Hello, customer {customer}!")
/// }
/// ```
pub struct RequireCustomer(pub CustomerId);

impl FromRequestParts<AppState> for RequireCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credential = bearer_credential(parts);

        let customer = state
            .verifier()
            .verify(credential)
            .await
            .map_err(AppError::Verify)?;

        Ok(Self(customer))
    }
}

/// Pull the bearer credential out of the `Authorization` header.
///
/// Accepts either `Bearer <token>` or a bare token value.
fn bearer_credential(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    Some(value.strip_prefix("Bearer ").unwrap_or(value))
}

#[cfg(test)]
mod tests {
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;

    use crate::services::VerifyError;

    use super::*;

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/cart/items");
        if let Some(v) = value {
            builder = builder.header(header::AUTHORIZATION, v);
        }
        let (parts, ()) = builder.body(()).expect("valid request").into_parts();
        parts
    }

    #[test]
    fn test_bearer_prefix_is_stripped() {
        let parts = parts_with_auth(Some("Bearer abc123"));
        assert_eq!(bearer_credential(&parts), Some("abc123"));
    }

    #[test]
    fn test_bare_token_is_accepted() {
        let parts = parts_with_auth(Some("abc123"));
        assert_eq!(bearer_credential(&parts), Some("abc123"));
    }

    #[test]
    fn test_absent_header() {
        let parts = parts_with_auth(None);
        assert_eq!(bearer_credential(&parts), None);
    }

    #[test]
    fn test_rejection_status() {
        let response = AppError::Verify(VerifyError::MissingCredential).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
