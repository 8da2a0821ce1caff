//! HTTP route handlers for the server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Greeting
//! GET  /health          - Health check
//!
//! # Products
//! GET  /products        - Catalog listing, sorted by title
//!
//! # Auth
//! POST /auth/login      - Login passthrough
//!
//! # Cart (requires Authorization: Bearer <token>)
//! POST /cart/items      - Add a product to the customer's cart
//! ```
//!
//! Unmatched routes respond 404 with an empty body.

pub mod auth;
pub mod cart;
pub mod products;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(auth::login))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/items", post(cart::add_item))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/products", get(products::index))
        .nest("/auth", auth_routes())
        .nest("/cart", cart_routes())
        .fallback(not_found)
}

/// Greeting at the root path.
async fn home() -> &'static str {
    "Hello, World!"
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the upstream.
async fn health() -> &'static str {
    "ok"
}

/// Fallback for unmatched routes: empty body, not-found status.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
