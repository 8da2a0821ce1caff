//! Wire types for the upstream product/identity API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopfront_core::ProductId;

/// A product as returned by the upstream catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub thumbnail: String,
}

/// Envelope around the upstream product listing.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductsPage {
    pub products: Vec<Product>,
}

/// Credentials forwarded to the upstream login endpoint.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_mins: Option<u32>,
}

/// A session as returned by the upstream login endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub image: String,
    pub token: String,
}

/// The identity record returned by the upstream `GET /auth/me` endpoint.
///
/// Only the field the verifier needs; the upstream returns more.
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    pub id: i64,
}
