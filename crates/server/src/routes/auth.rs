//! Login passthrough.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::dummyjson::{
    UpstreamError,
    types::{LoginCredentials, LoginSession},
};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// The caller-visible user shape returned after a successful login.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub token: String,
}

impl From<LoginSession> for User {
    fn from(session: LoginSession) -> Self {
        Self {
            username: session.username,
            first_name: session.first_name,
            last_name: session.last_name,
            avatar: session.image,
            token: session.token,
        }
    }
}

/// Authenticate a user against the upstream identity authority.
///
/// A client-error status from upstream is reported as invalid credentials;
/// any other failure as a generic authentication failure.
#[instrument(skip(state, credentials), fields(username = %credentials.username))]
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginCredentials>,
) -> Result<Json<User>> {
    let session = state
        .upstream()
        .login(&credentials)
        .await
        .map_err(|e| match e {
            UpstreamError::Status(status) if status.is_client_error() => {
                AppError::Unauthorized("invalid credentials".to_string())
            }
            other => {
                tracing::error!(error = %other, "Login failed");
                AppError::Internal("authentication failed".to_string())
            }
        })?;

    Ok(Json(User::from(session)))
}
